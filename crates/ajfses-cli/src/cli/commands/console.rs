//! Console and notify command handlers.

use ajfses_core::config::Config;
use ajfses_tui::ConsoleMode;
use ajfses_tui::overlays::{OverlayRequest, Severity};
use anyhow::Result;

pub async fn dashboard(config: &Config, host: &str) -> Result<()> {
    ajfses_tui::run_console(config, ConsoleMode::Dashboard, host).await
}

pub async fn notify(
    config: &Config,
    host: &str,
    title: &str,
    message: &str,
    severity: &str,
) -> Result<()> {
    let request = OverlayRequest::new(title, message, Severity::from_label(severity));
    ajfses_tui::run_console(config, ConsoleMode::Notify(request), host).await
}
