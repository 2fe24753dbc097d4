//! API base URL selection by hostname.

use std::fmt;

use crate::config::ApiConfig;

/// Which backend a hostname maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Resolved API endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub environment: Environment,
    pub base_url: String,
}

/// Selects the API endpoint for `host`.
///
/// Hosts listed in `dev_hosts` (compared case-insensitively, surrounding
/// whitespace ignored) use the development URL; everything else is production.
pub fn resolve(api: &ApiConfig, host: &str) -> Endpoint {
    let host = host.trim();
    let is_dev = api
        .dev_hosts
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(host));
    tracing::debug!(host, is_dev, "resolving api endpoint");

    if is_dev {
        Endpoint {
            environment: Environment::Development,
            base_url: api.dev_url.clone(),
        }
    } else {
        Endpoint {
            environment: Environment::Production,
            base_url: api.prod_url.clone(),
        }
    }
}
