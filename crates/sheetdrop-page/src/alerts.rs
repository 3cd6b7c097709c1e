//! Automatic dismissal of notification banners.

use std::{sync::Arc, time::Duration};

use sheetdrop_bridge::Dismissible;
use tokio::{task::JoinHandle, time::Instant};

/// Schedules a one-shot dismissal for every banner.
///
/// Each banner is moved into its own task, which sleeps until `delay` after
/// this call and then closes it once. Dismissals can't be cancelled; they
/// only stop firing if the runtime is torn down first. A panicking `close` is
/// left to the task's default panic handling.
pub fn schedule_dismissals(
    alerts: Vec<Arc<dyn Dismissible>>,
    delay: Duration,
) -> Vec<JoinHandle<()>> {
    log::debug!(
        "Scheduling dismissal of {} notification(s) in {delay:?}",
        alerts.len()
    );

    let deadline = Instant::now() + delay;
    alerts
        .into_iter()
        .enumerate()
        .map(|(index, alert)| {
            tokio::spawn(async move {
                tokio::time::sleep_until(deadline).await;
                alert.close();
                log::debug!("Dismissed notification #{index}");
            })
        })
        .collect()
}
