//! Overlay modules for the console.
//!
//! The status overlay is a modal panel that temporarily takes over keyboard
//! input. It owns its state, key handler, pointer handler and render function.
//!
//! ## Module Structure
//!
//! - `status.rs`: Status overlay controller (phases, timers, dismissal)
//! - `status_view.rs`: Status overlay rendering
//! - `visual.rs`: Animated visual state shared by the controller and renderer
//! - `render_utils.rs`: Shared rendering utilities for overlays

pub mod render_utils;
mod status;
mod status_view;
mod visual;

pub use status::{
    IconStyle, OverlayController, OverlayPhase, OverlayRegions, OverlayRequest, OverlayTiming,
    Severity,
};
pub use visual::{Transition, Visual};
