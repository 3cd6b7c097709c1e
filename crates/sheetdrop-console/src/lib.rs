//! Terminal host shell for the upload page.
//!
//! Banners are printed to stdout, user-facing messages go to stderr and every
//! stdin line becomes the new selection of the upload file picker.

use std::{io::BufRead, sync::Arc};

use sheetdrop_bridge::{Dismissible, FileSelection, PageEvent, notification::NotificationType};
use sheetdrop_page::Page;
use tokio::sync::mpsc;

use crate::widgets::{ConsoleAlert, ConsoleFileInput, ConsoleNotifier};

pub mod widgets;

/// The console view: its banners and the upload file picker.
pub struct ConsolePage {
    alerts: Vec<Arc<ConsoleAlert>>,
    file_input: Arc<ConsoleFileInput>,
}

impl ConsolePage {
    pub fn new() -> Self {
        let alerts = vec![
            Arc::new(ConsoleAlert::new(
                NotificationType::Info,
                "Upload a spreadsheet to split its sentences.",
            )),
            Arc::new(ConsoleAlert::new(
                NotificationType::Info,
                "Type a filename and press Enter to select it; Ctrl-D quits.",
            )),
        ];
        Self {
            alerts,
            file_input: Arc::new(ConsoleFileInput::default()),
        }
    }

    /// Prints the banners and hands the view's capabilities to the page
    /// behaviors.
    pub fn page(&self) -> Page {
        for alert in &self.alerts {
            alert.show();
        }
        Page {
            alerts: self
                .alerts
                .iter()
                .map(|alert| alert.clone() as Arc<dyn Dismissible>)
                .collect(),
            file_input: Some(self.file_input.clone() as Arc<dyn FileSelection>),
            notifier: Arc::new(ConsoleNotifier),
        }
    }

    /// Reads file selections from stdin until EOF, reporting each change to
    /// the page runtime.
    pub fn run(&self, tx: mpsc::Sender<PageEvent>) -> anyhow::Result<()> {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            self.file_input.select(line.trim());
            tx.blocking_send(PageEvent::FileSelectionChanged)?;
        }
        log::debug!("Stdin closed, leaving the console host");
        Ok(())
    }
}

impl Default for ConsolePage {
    fn default() -> Self {
        Self::new()
    }
}
