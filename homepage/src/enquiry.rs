//! Enquiry modal: consent gating and hand-off to a delivery handler.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::EnquiryError;

/// Fields collected by the enquiry form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub username: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub agreed_to_terms: bool,
    /// Project card the form was opened from. Filled in from the modal on
    /// submit when the form leaves it empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

/// Delivers accepted enquiries. Delivery itself lives outside this crate.
pub trait EnquiryHandler {
    fn deliver(&mut self, enquiry: &Enquiry) -> Result<(), EnquiryError>;
}

impl<F> EnquiryHandler for F
where
    F: FnMut(&Enquiry) -> Result<(), EnquiryError>,
{
    fn deliver(&mut self, enquiry: &Enquiry) -> Result<(), EnquiryError> {
        self(enquiry)
    }
}

/// Open/closed state of the enquiry modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryModal {
    open: bool,
    project: Option<String>,
}

impl EnquiryModal {
    pub fn open(&mut self) {
        self.open = true;
        self.project = None;
    }

    /// Open the modal from a project card.
    pub fn open_for(&mut self, project: impl Into<String>) {
        self.open = true;
        self.project = Some(project.into());
    }

    pub fn close(&mut self) {
        self.open = false;
        self.project = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Project the enquiry was opened from, if any.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Submit the form.
    ///
    /// Without consent nothing happens beyond the returned error: the handler
    /// is not called and the modal stays open. A delivery failure also leaves
    /// the modal open. On success the modal closes.
    ///
    /// The delivered record carries the modal's project unless the form
    /// already named one.
    pub fn submit<H>(&mut self, enquiry: &Enquiry, handler: &mut H) -> Result<(), EnquiryError>
    where
        H: EnquiryHandler + ?Sized,
    {
        if !enquiry.agreed_to_terms {
            warn!("enquiry submitted without accepting terms");
            return Err(EnquiryError::TermsNotAccepted);
        }

        let mut record = enquiry.clone();
        if record.project.is_none() {
            record.project = self.project.clone();
        }
        handler.deliver(&record)?;
        info!(project = ?record.project, "enquiry handed off");
        self.close();
        Ok(())
    }
}
