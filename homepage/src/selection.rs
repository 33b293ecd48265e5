//! Zone detail selection for the "homes in every zone" section.

use crate::content::{RecordId, Zone};

/// Which zone, if any, is shown in the detail modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoneSelection {
    #[default]
    Closed,
    Open(RecordId),
}

impl ZoneSelection {
    /// Open the modal on a zone from the grid.
    pub fn select(&mut self, id: RecordId) {
        *self = ZoneSelection::Open(id);
    }

    /// Swap the modal content to a zone from the sidebar. The modal stays open.
    pub fn select_other(&mut self, id: RecordId) {
        *self = ZoneSelection::Open(id);
    }

    pub fn close(&mut self) {
        *self = ZoneSelection::Closed;
    }

    pub fn selected_id(self) -> Option<RecordId> {
        match self {
            ZoneSelection::Closed => None,
            ZoneSelection::Open(id) => Some(id),
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, ZoneSelection::Open(_))
    }

    /// The selected zone record.
    pub fn selected(self, zones: &[Zone]) -> Option<&Zone> {
        let id = self.selected_id()?;
        zones.iter().find(|zone| zone.id == id)
    }

    /// Every zone except the selected one, in original order.
    pub fn sidebar(self, zones: &[Zone]) -> Vec<&Zone> {
        match self.selected_id() {
            Some(id) => zones.iter().filter(|zone| zone.id != id).collect(),
            None => Vec::new(),
        }
    }
}
