//! UI event types.
//!
//! All external inputs (terminal, timers, background checks) are converted to
//! `UiEvent` before being processed by the reducer.

use crossterm::event::Event as CrosstermEvent;

use crate::common::TimerId;
use crate::session::SessionSnapshot;

#[derive(Debug)]
pub enum UiEvent {
    /// Frame cadence tick.
    Tick,

    /// Raw terminal input.
    Terminal(CrosstermEvent),

    /// A scheduled timer fired.
    TimerElapsed(TimerId),

    /// Result of `UiEffect::CheckSession`.
    SessionChecked(SessionSnapshot),
}
