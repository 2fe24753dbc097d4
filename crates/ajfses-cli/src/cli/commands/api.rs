//! API endpoint command.

use ajfses_core::api;
use ajfses_core::config::Config;

pub fn url(config: &Config, host: &str) {
    let endpoint = api::resolve(&config.api, host);
    println!("{}", endpoint.base_url);
}
