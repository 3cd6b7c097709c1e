//! Page context and event dispatching.
//!
//! [`init`] is the page-ready entry point: it starts the banner dismissals
//! and attaches the upload guard. The returned [`PageBehaviors`] then routes
//! host events to the guard.

use std::sync::Arc;

use sheetdrop_bridge::{Dismissible, FileSelection, PageEvent, UserNotifier, config::PageConfig};
use tokio::{sync::mpsc::Receiver, task::JoinHandle};

use crate::{
    alerts,
    config::ConfigError,
    extensions::AllowedExtensions,
    guard::{SelectionOutcome, UploadGuard},
};

/// Capabilities of the constructed view, handed over by the host.
pub struct Page {
    /// Every notification banner present when the view became ready.
    pub alerts: Vec<Arc<dyn Dismissible>>,
    /// The upload file picker, if the view has one.
    pub file_input: Option<Arc<dyn FileSelection>>,
    /// Channel for user-facing messages.
    pub notifier: Arc<dyn UserNotifier>,
}

/// Behaviors attached to a page by [`init`].
pub struct PageBehaviors {
    guard: UploadGuard,
    dismissals: Vec<JoinHandle<()>>,
}

/// Initializes the page behaviors. Call once, from inside a tokio runtime,
/// after the host has constructed its view.
pub fn init(page: Page, config: &PageConfig) -> Result<PageBehaviors, ConfigError> {
    let extensions = AllowedExtensions::new(&config.upload.allowed_extensions)?;

    let dismissals = alerts::schedule_dismissals(page.alerts, config.alerts.dismiss_delay());
    let guard = UploadGuard::new(
        page.file_input,
        page.notifier,
        extensions,
        config.upload.format_label.clone(),
    );
    if !guard.is_attached() {
        log::debug!("No upload control on this page, filename guard is inert");
    }

    Ok(PageBehaviors { guard, dismissals })
}

impl PageBehaviors {
    /// Handles of the scheduled banner dismissals.
    pub fn dismissals(&self) -> &[JoinHandle<()>] {
        &self.dismissals
    }

    /// Handles a single event from the host.
    pub fn dispatch_event(&self, event: PageEvent) -> SelectionOutcome {
        match event {
            PageEvent::FileSelectionChanged => self.guard.handle_selection_change(),
        }
    }

    /// Reads and dispatches events from the host until its sender is dropped.
    pub async fn consume_page_events(&self, mut rx: Receiver<PageEvent>) {
        while let Some(event) = rx.recv().await {
            log::debug!("Got a page event: {event:?}");
            self.dispatch_event(event);
        }
    }

    /// Waits until every scheduled dismissal has fired.
    pub async fn wait_for_dismissals(self) {
        for handle in self.dismissals {
            if let Err(error) = handle.await {
                log::error!("Notification dismissal failed: {error}");
            }
        }
    }
}
