//! Overlay visual state and transitions.
//!
//! A visual change never jumps: it records where the overlay was drawn, where
//! it is heading and over how long. The renderer samples the transition each
//! frame.

use std::time::{Duration, Instant};

/// Presentation of the backdrop and panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    /// Backdrop opacity, 0.0..=1.0.
    pub backdrop_opacity: f32,
    /// Panel opacity, 0.0..=1.0.
    pub panel_opacity: f32,
    /// Rows the panel is pushed down from its resting place.
    pub panel_offset: f32,
    /// Panel size relative to its resting size.
    pub panel_scale: f32,
}

impl Visual {
    /// Start state: transparent, lowered, slightly shrunk.
    pub const CONCEALED: Visual = Visual {
        backdrop_opacity: 0.0,
        panel_opacity: 0.0,
        panel_offset: 4.0,
        panel_scale: 0.95,
    };

    /// End state: opaque, in place, full size.
    pub const REVEALED: Visual = Visual {
        backdrop_opacity: 1.0,
        panel_opacity: 1.0,
        panel_offset: 0.0,
        panel_scale: 1.0,
    };

    fn lerp(self, to: Visual, t: f32) -> Visual {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Visual {
            backdrop_opacity: mix(self.backdrop_opacity, to.backdrop_opacity),
            panel_opacity: mix(self.panel_opacity, to.panel_opacity),
            panel_offset: mix(self.panel_offset, to.panel_offset),
            panel_scale: mix(self.panel_scale, to.panel_scale),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: Visual,
    to: Visual,
    started: Instant,
    duration: Duration,
}

impl Transition {
    /// A transition that is already at rest on `visual`.
    pub fn settled(visual: Visual) -> Self {
        Self {
            from: visual,
            to: visual,
            started: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    /// Starts a new transition from wherever this one is at `now`.
    #[must_use]
    pub fn toward(&self, to: Visual, now: Instant, duration: Duration) -> Self {
        Self {
            from: self.sample(now),
            to,
            started: now,
            duration,
        }
    }

    pub fn target(&self) -> Visual {
        self.to
    }

    pub fn sample(&self, now: Instant) -> Visual {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, ease_out(progress))
        }
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
