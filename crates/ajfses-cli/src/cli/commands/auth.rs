//! Session credential commands.
//!
//! `login`/`logout` only seed or clear the persistent scope; the real sign-in
//! flow lives elsewhere.

use ajfses_core::auth::{self, SessionPresence};
use ajfses_core::storage::Scopes;
use anyhow::{Context, Result};

pub fn status() {
    let scopes = Scopes::open_default();
    let providers = scopes.lookup_order();
    let presence = SessionPresence::new(&providers);

    match presence.current_user() {
        Some(user) => println!("authenticated as {user}"),
        None => println!("not authenticated"),
    }
}

pub fn login(token: &str, user: &str) -> Result<()> {
    if token.trim().is_empty() || user.trim().is_empty() {
        anyhow::bail!("Both --token and --user must be non-empty");
    }
    let mut scopes = Scopes::open_default();
    auth::store_credentials(&mut scopes.persistent, token, user).with_context(|| {
        format!(
            "store credentials in {}",
            scopes.persistent.path().display()
        )
    })?;
    tracing::info!(user, "credentials stored");
    println!("Stored credentials for {user}");
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut scopes = Scopes::open_default();
    auth::clear_credentials(&mut scopes.persistent).with_context(|| {
        format!(
            "clear credentials in {}",
            scopes.persistent.path().display()
        )
    })?;
    tracing::info!("credentials cleared");
    println!("Cleared stored credentials");
    Ok(())
}
