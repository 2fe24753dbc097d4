//! Session feature slice.
//!
//! Shows whether a cached credential pair is present and turns a fresh
//! presence check into a status overlay request.
//!
//! ## Module Structure
//!
//! - `state.rs`: SessionSnapshot (result of one presence check)
//! - `render.rs`: Session line rendering

mod render;
mod state;

pub use render::render_session_line;
pub use state::SessionSnapshot;
