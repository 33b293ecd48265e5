//! Per-page interactive state carried between renders.

use tracing::debug;

use crate::content::WebsiteContent;
use crate::enquiry::EnquiryModal;
use crate::filters::TrendingTabs;
use crate::selection::ZoneSelection;

/// Everything the page remembers between renders of fresh content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub trending: TrendingTabs,
    pub zone: ZoneSelection,
    pub enquiry: EnquiryModal,
}

impl ViewState {
    /// Initial state: first trending tab active, both modals closed.
    pub fn new(content: &WebsiteContent) -> Self {
        Self {
            trending: TrendingTabs::new(&content.trending_projects),
            ..Self::default()
        }
    }

    /// Reconcile with a reloaded content snapshot.
    ///
    /// The trending tab resets only if its label disappeared. An open zone
    /// whose record is gone closes the modal.
    pub fn sync(&mut self, content: &WebsiteContent) {
        self.trending.sync(&content.trending_projects);
        if self.zone.is_open() && self.zone.selected(&content.homes_in_every_zone).is_none() {
            debug!(zone = ?self.zone.selected_id(), "selected zone vanished, closing modal");
            self.zone.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Project, Zone};
    use pretty_assertions::assert_eq;

    fn project(id: u64, location: &str) -> Project {
        Project {
            id,
            name: format!("Project {id}"),
            location: location.into(),
            ..Default::default()
        }
    }

    fn zone(id: u64, name: &str) -> Zone {
        Zone {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_on_first_sorted_tab_with_modals_closed() {
        let content = WebsiteContent {
            trending_projects: vec![project(1, "Thane"), project(2, "Andheri")],
            ..Default::default()
        };
        let state = ViewState::new(&content);
        assert_eq!(state.trending.active(), Some("Andheri"));
        assert!(!state.zone.is_open());
        assert!(!state.enquiry.is_open());
    }

    #[test]
    fn sync_keeps_surviving_tab_and_zone() {
        let mut content = WebsiteContent {
            trending_projects: vec![project(1, "Andheri"), project(2, "Thane")],
            homes_in_every_zone: vec![zone(1, "Thane"), zone(2, "Western Suburbs")],
            ..Default::default()
        };
        let mut state = ViewState::new(&content);
        state.trending.activate("Thane");
        state.zone.select(2);

        content.trending_projects.push(project(3, "Bandra"));
        state.sync(&content);

        assert_eq!(state.trending.active(), Some("Thane"));
        assert_eq!(state.zone, ZoneSelection::Open(2));
    }

    #[test]
    fn sync_resets_vanished_tab_and_closes_vanished_zone() {
        let mut content = WebsiteContent {
            trending_projects: vec![project(1, "Andheri"), project(2, "Thane")],
            homes_in_every_zone: vec![zone(1, "Thane"), zone(2, "Western Suburbs")],
            ..Default::default()
        };
        let mut state = ViewState::new(&content);
        state.trending.activate("Thane");
        state.zone.select(2);

        content.trending_projects = vec![project(4, "Worli"), project(5, "Bandra")];
        content.homes_in_every_zone.truncate(1);
        state.sync(&content);

        assert_eq!(state.trending.active(), Some("Bandra"));
        assert_eq!(state.zone, ZoneSelection::Closed);
    }
}
