//! Header logo feature slice.
//!
//! The header starts on the variant shown by the previous run, fades it
//! out, swaps to the new variant and fades that in. Each half of the fade is
//! one scheduled timer.
//!
//! ## Module Structure
//!
//! - `state.rs`: LogoState (fade phases and timers)
//! - `render.rs`: Header badge rendering

mod render;
mod state;

pub use render::render_logo;
pub use state::{LogoPhase, LogoState};
