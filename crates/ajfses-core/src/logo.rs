//! Header logo alternation.
//!
//! Every console start shows the variant that was not shown last time. The
//! last shown variant is persisted under `lastLogo`.

use std::fmt;

use anyhow::Result;

use crate::config::LogoConfig;
use crate::storage::{Storage, StorageMut};

pub const LAST_LOGO_KEY: &str = "lastLogo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoVariant {
    Circle,
    Normal,
}

impl LogoVariant {
    /// Stored flag value.
    pub fn as_str(self) -> &'static str {
        match self {
            LogoVariant::Circle => "circle",
            LogoVariant::Normal => "normal",
        }
    }

    /// Reads a stored flag. Anything but `"circle"` counts as normal.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "circle" {
            LogoVariant::Circle
        } else {
            LogoVariant::Normal
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            LogoVariant::Circle => LogoVariant::Normal,
            LogoVariant::Normal => LogoVariant::Circle,
        }
    }

    /// Image asset for this variant.
    pub fn asset(self, config: &LogoConfig) -> &str {
        match self {
            LogoVariant::Circle => &config.circle_asset,
            LogoVariant::Normal => &config.normal_asset,
        }
    }
}

impl fmt::Display for LogoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one alternation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoSwap {
    /// Variant shown on the previous start (fades out).
    pub previous: LogoVariant,
    /// Variant to show now (fades in).
    pub shown: LogoVariant,
}

/// Picks the variant to show and persists it as the new `lastLogo`.
///
/// A missing or unreadable flag counts as `"circle"`.
///
/// # Errors
/// Returns an error if the new flag cannot be written.
pub fn advance(storage: &mut dyn StorageMut) -> Result<LogoSwap> {
    let previous = match storage.get(LAST_LOGO_KEY) {
        Ok(Some(flag)) => LogoVariant::from_flag(&flag),
        Ok(None) => LogoVariant::Circle,
        Err(err) => {
            tracing::warn!(scope = storage.scope(), "failed to read logo flag: {err:#}");
            LogoVariant::Circle
        }
    };
    let shown = previous.opposite();
    storage.set(LAST_LOGO_KEY, shown.as_str())?;
    tracing::debug!(%previous, %shown, "logo advanced");

    Ok(LogoSwap { previous, shown })
}
