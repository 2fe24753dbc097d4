//! Full-screen terminal console for ajfses.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use ajfses_core::api;
use ajfses_core::config::Config;
use ajfses_core::logo::{self as logo_flag, LAST_LOGO_KEY, LogoVariant};
use ajfses_core::storage::{Scopes, Storage};
use anyhow::Result;
pub use features::{logo, session};
pub use runtime::ConsoleRuntime;
pub use state::ConsoleMode;

use crate::logo::LogoState;

/// Runs the console until the user quits or, in notify mode, until the
/// overlay has closed.
///
/// # Errors
/// Returns an error if stdout is not a terminal or terminal I/O fails.
pub async fn run_console(config: &Config, mode: ConsoleMode, host: &str) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The console requires a terminal.\n\
             Use `ajfses auth status` or `ajfses date` for non-interactive use."
        );
    }

    let mut scopes = Scopes::open_default();
    let session = runtime::load_session(scopes.clone()).await;
    let logo = startup_logo(config, &mut scopes, &mode);
    let endpoint = api::resolve(&config.api, host);
    tracing::info!(
        environment = %endpoint.environment,
        authenticated = session.is_authenticated(),
        "console starting"
    );

    let state = state::AppState::new(config, mode, logo, session, endpoint);
    let mut runtime = ConsoleRuntime::new(state, scopes)?;
    runtime.run()
}

/// The dashboard alternates the logo on every start. Notify runs leave the
/// flag alone and show whatever was shown last.
fn startup_logo(config: &Config, scopes: &mut Scopes, mode: &ConsoleMode) -> LogoState {
    if let ConsoleMode::Notify(_) = mode {
        let variant = match scopes.persistent.get(LAST_LOGO_KEY) {
            Ok(Some(flag)) => LogoVariant::from_flag(&flag),
            _ => LogoVariant::Circle,
        };
        return LogoState::still(variant, &config.logo);
    }

    match logo_flag::advance(&mut scopes.persistent) {
        Ok(swap) => LogoState::new(swap, &config.logo),
        Err(err) => {
            tracing::warn!("failed to advance logo flag: {err:#}");
            LogoState::still(LogoVariant::Normal, &config.logo)
        }
    }
}
