// web_app/state/deletion.rs - Two-step delete confirmation

use crate::web_app::error::StoreResult;

/// Confirmation prompt state
///
/// Opening and cancelling are local. `finish` closes the prompt whatever
/// the request outcome was.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeletePrompt {
    open: bool,
    deleting: bool,
}

impl DeletePrompt {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Dismiss without deleting; ignored while a request is outstanding
    pub fn cancel(&mut self) {
        if !self.deleting {
            self.open = false;
        }
    }

    /// Confirm the prompt; returns true when the caller should issue the
    /// delete request
    pub fn begin(&mut self) -> bool {
        if !self.open || self.deleting {
            return false;
        }
        self.deleting = true;
        true
    }

    /// Close the prompt after the request settles
    ///
    /// Returns true when the deletion succeeded and the caller's
    /// success callback should run. Failures are only logged.
    pub fn finish(&mut self, result: &StoreResult<()>) -> bool {
        self.deleting = false;
        self.open = false;

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error deleting product: {}", e);
                false
            }
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.deleting {
            "Deleting..."
        } else {
            "Delete"
        }
    }
}
