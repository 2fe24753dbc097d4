//! Core ajfses library (config, storage scopes, session presence, dates, logo flag).

pub mod api;
pub mod auth;
pub mod config;
pub mod date;
pub mod logging;
pub mod logo;
pub mod storage;
