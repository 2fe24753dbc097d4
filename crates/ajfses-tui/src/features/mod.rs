//! Feature slices for the console (state/render per slice).

pub mod logo;
pub mod session;
