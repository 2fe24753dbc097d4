//! Logo flag command.

use ajfses_core::config::Config;
use ajfses_core::logo;
use ajfses_core::storage::FileStorage;
use anyhow::{Context, Result};

pub fn advance(config: &Config) -> Result<()> {
    let mut storage = FileStorage::open_default();
    let swap = logo::advance(&mut storage)
        .with_context(|| format!("update logo flag in {}", storage.path().display()))?;
    println!("{} {}", swap.shown, swap.shown.asset(&config.logo));
    Ok(())
}
