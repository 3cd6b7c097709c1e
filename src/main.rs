use anyhow::Context;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let channels = sheetdrop_bridge::PageChannels::default();
    let console = sheetdrop_console::ConsolePage::new();
    let page_thread = sheetdrop_page::run(console.page(), channels.page_rx);

    let host_result = console.run(channels.host_tx);
    // A config error also closes the channel; report the cause, not the symptom.
    match page_thread.join() {
        Ok(result) => result.context("page runtime failed")?,
        Err(_) => anyhow::bail!("page runtime panicked"),
    }
    host_result
}
