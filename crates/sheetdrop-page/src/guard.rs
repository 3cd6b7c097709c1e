//! Filename check for the upload file picker.
//!
//! The check only inspects the suffix of the name reported by the control.
//! It never looks at file content and is not a security control; whatever
//! receives the upload has to validate it on its own.

use std::sync::Arc;

use sheetdrop_bridge::{FileSelection, UserNotifier};

use crate::extensions::AllowedExtensions;

/// Errors produced by the filename check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    /// The selected filename does not end with any allowed suffix.
    #[error("file {filename:?} does not have an allowed extension")]
    InvalidFileExtension { filename: String },
}

/// Checks a selected filename against the allow-list.
///
/// An empty filename means the selection was cleared and is always accepted.
pub fn check_filename(filename: &str, extensions: &AllowedExtensions) -> Result<(), GuardError> {
    if filename.is_empty() || extensions.matches(filename) {
        return Ok(());
    }
    Err(GuardError::InvalidFileExtension {
        filename: filename.to_owned(),
    })
}

/// Result of handling a single selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The view has no upload control; nothing was checked.
    Inert,
    /// The selection is empty; nothing to do.
    Empty,
    /// The filename has an allowed suffix.
    Accepted,
    /// The filename was rejected; the user was warned and the selection
    /// cleared, unless a newer one had replaced it in the meantime.
    Rejected,
}

/// Watches the upload control and clears selections with a suffix outside
/// the allow-list.
pub struct UploadGuard {
    control: Option<Arc<dyn FileSelection>>,
    notifier: Arc<dyn UserNotifier>,
    extensions: AllowedExtensions,
    format_label: String,
}

impl UploadGuard {
    pub fn new(
        control: Option<Arc<dyn FileSelection>>,
        notifier: Arc<dyn UserNotifier>,
        extensions: AllowedExtensions,
        format_label: impl Into<String>,
    ) -> Self {
        Self {
            control,
            notifier,
            extensions,
            format_label: format_label.into(),
        }
    }

    /// Whether the guard is attached to an upload control.
    pub fn is_attached(&self) -> bool {
        self.control.is_some()
    }

    /// Message shown to the user when a selection is rejected.
    pub fn rejection_message(&self) -> String {
        format!(
            "Please select a valid {} file {}",
            self.format_label,
            self.extensions.describe()
        )
    }

    /// Handles a change of the control's selection. Only reads the current
    /// value, so repeated calls with the same value behave the same.
    pub fn handle_selection_change(&self) -> SelectionOutcome {
        let Some(control) = &self.control else {
            return SelectionOutcome::Inert;
        };

        let filename = control.value();
        if filename.is_empty() {
            return SelectionOutcome::Empty;
        }

        match check_filename(&filename, &self.extensions) {
            Ok(()) => {
                log::debug!("Accepted upload selection {filename:?}");
                SelectionOutcome::Accepted
            }
            Err(error) => {
                log::info!("Rejecting upload selection: {error}");
                self.notifier.warn(&self.rejection_message());
                if !control.clear_if(&filename) {
                    log::debug!("Selection changed after {filename:?} was read, keeping it");
                }
                SelectionOutcome::Rejected
            }
        }
    }
}
