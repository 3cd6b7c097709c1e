//! Shared types between the page behaviors and the hosting shell.
//!
//! The page behaviors never touch a concrete UI toolkit. Instead the host
//! hands them narrow capability objects:
//! - [`Dismissible`] for every notification banner present at page-ready;
//! - [`FileSelection`] for the upload file picker, when the view has one;
//! - [`UserNotifier`] for user-facing messages.
//!
//! Selection changes travel from the host to the page runtime as
//! [`PageEvent`]s over a bounded [`tokio::sync::mpsc`] channel wrapped in
//! [`PageChannels`].

pub mod config;
pub mod notification;

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::notification::NotificationMessage;

/// A notification banner that can be closed by the host's dismissal
/// mechanism.
pub trait Dismissible: Send + Sync {
    /// Closes the banner and removes it from view.
    fn close(&self);
}

/// The upload file picker.
pub trait FileSelection: Send + Sync {
    /// Current selection as reported by the control. Empty when nothing is
    /// selected.
    fn value(&self) -> String;

    /// Clears the selection if it still equals `expected`, checking and
    /// clearing as one step. Returns `false` and leaves the selection alone if
    /// it has changed since it was read. After a successful clear,
    /// [`FileSelection::value`] returns an empty string.
    fn clear_if(&self, expected: &str) -> bool;
}

/// Channel used to surface messages to the user.
pub trait UserNotifier: Send + Sync {
    /// Shows a notification to the user.
    fn notify(&self, message: NotificationMessage);

    /// Shows a warning to the user.
    fn warn(&self, message: &str) {
        self.notify(NotificationMessage::warning(message));
    }
}

/// Events emitted by the host to the page runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The user changed the selection of the upload file picker.
    FileSelectionChanged,
}

/// A `tokio::mpsc` channel carrying [`PageEvent`]s from the host to the page
/// runtime.
pub struct PageChannels {
    /// Sender kept by the host shell.
    pub host_tx: Sender<PageEvent>,
    /// Receiver consumed by the page runtime.
    pub page_rx: Receiver<PageEvent>,
}

impl PageChannels {
    /// Creates a new channel pair with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (host_tx, page_rx) = mpsc::channel(buffer);
        Self { host_tx, page_rx }
    }
}

impl Default for PageChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
