//! Page runtime setup.
//!
//! Loads configuration, attaches the page behaviors and listens to host
//! events on a dedicated single-threaded runtime.

use std::{path::PathBuf, thread};

use sheetdrop_bridge::PageEvent;
use tokio::sync::mpsc::Receiver;

use crate::{
    app::{Page, init},
    config::{ConfigError, default_config_path, load_config_from},
};

/// Load configuration, attach behaviors and process host events.
async fn setup_page(
    page: Page,
    rx: Receiver<PageEvent>,
    config_path: Option<PathBuf>,
) -> Result<(), ConfigError> {
    let config_path = match config_path {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = load_config_from(&config_path).await?;

    let behaviors = init(page, &config)?;
    behaviors.consume_page_events(rx).await;

    log::debug!("Host closed the event channel, waiting for pending dismissals");
    behaviors.wait_for_dismissals().await;
    Ok(())
}

fn spawn_page_thread(
    page: Page,
    rx: Receiver<PageEvent>,
    config_path: Option<PathBuf>,
) -> thread::JoinHandle<Result<(), ConfigError>> {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let result = runtime.block_on(setup_page(page, rx, config_path));
        if let Err(error) = &result {
            log::error!("Page runtime stopped: {error}");
        }
        result
    })
}

/// Spawn the page runtime with the configuration from the user's config
/// directory. The thread ends once the host drops its event sender and every
/// banner has been dismissed; it returns early with the error if the
/// configuration can't be loaded or is invalid.
pub fn run(page: Page, rx: Receiver<PageEvent>) -> thread::JoinHandle<Result<(), ConfigError>> {
    spawn_page_thread(page, rx, None)
}

/// Like [`run`], reading the configuration from `config_path`.
pub fn run_with_config(
    page: Page,
    rx: Receiver<PageEvent>,
    config_path: PathBuf,
) -> thread::JoinHandle<Result<(), ConfigError>> {
    spawn_page_thread(page, rx, Some(config_path))
}
