//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They cover timer scheduling and I/O only; the reducer never sleeps, spawns
//! or touches storage itself.
//!
//! ## Timer Effects
//!
//! Every delayed transition is a `ScheduleTimer` with a fresh `TimerId`.
//! Superseding a transition emits `CancelTimer` for the old id first, so the
//! runtime drops its sleeper before the replacement is scheduled.

use std::time::Duration;

use crate::common::TimerId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the console.
    Quit,

    /// Deliver `UiEvent::TimerElapsed(id)` after `after`.
    ScheduleTimer { id: TimerId, after: Duration },

    /// Drop a scheduled timer. Unknown or already fired ids are ignored.
    CancelTimer { id: TimerId },

    /// Run the session presence check and report `UiEvent::SessionChecked`.
    CheckSession,
}
