//! CLI command handlers.

pub mod api;
pub mod auth;
pub mod config;
pub mod console;
pub mod date;
pub mod logo;
