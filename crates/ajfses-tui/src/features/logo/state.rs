//! Logo crossfade state.

use std::time::Duration;

use ajfses_core::config::LogoConfig;
use ajfses_core::logo::{LogoSwap, LogoVariant};

use crate::common::{TimerId, TimerOwner, TimerSeq};
use crate::effects::UiEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoPhase {
    /// Previous variant on screen, fading out.
    FadingOut,
    /// New variant on screen, fading in.
    FadingIn,
    Settled,
}

#[derive(Debug)]
pub struct LogoState {
    swap: LogoSwap,
    phase: LogoPhase,
    half_step: Duration,
    config: LogoConfig,
    pending: Option<TimerId>,
    timers: TimerSeq,
}

impl LogoState {
    /// A logo that crossfades from `swap.previous` to `swap.shown` once started.
    pub fn new(swap: LogoSwap, config: &LogoConfig) -> Self {
        Self {
            swap,
            phase: LogoPhase::FadingOut,
            half_step: config.fade_half_step(),
            config: config.clone(),
            pending: None,
            timers: TimerSeq::new(TimerOwner::Logo),
        }
    }

    /// A logo that shows `variant` without fading.
    pub fn still(variant: LogoVariant, config: &LogoConfig) -> Self {
        let mut state = Self::new(
            LogoSwap {
                previous: variant,
                shown: variant,
            },
            config,
        );
        state.phase = LogoPhase::Settled;
        state
    }

    /// Schedules the first half of the fade.
    pub fn start(&mut self) -> Vec<UiEffect> {
        if self.phase != LogoPhase::FadingOut || self.pending.is_some() {
            return Vec::new();
        }
        vec![self.schedule()]
    }

    pub fn on_timer(&mut self, id: TimerId) -> Vec<UiEffect> {
        if self.pending.take_if(|pending| *pending == id).is_none() {
            return Vec::new();
        }
        match self.phase {
            LogoPhase::FadingOut => {
                self.phase = LogoPhase::FadingIn;
                tracing::debug!(shown = %self.swap.shown, "logo swapped");
                vec![self.schedule()]
            }
            LogoPhase::FadingIn | LogoPhase::Settled => {
                self.phase = LogoPhase::Settled;
                Vec::new()
            }
        }
    }

    pub fn phase(&self) -> LogoPhase {
        self.phase
    }

    /// Variant currently on screen.
    pub fn displayed(&self) -> LogoVariant {
        match self.phase {
            LogoPhase::FadingOut => self.swap.previous,
            LogoPhase::FadingIn | LogoPhase::Settled => self.swap.shown,
        }
    }

    pub fn asset(&self) -> &str {
        self.displayed().asset(&self.config)
    }

    pub fn is_fading(&self) -> bool {
        self.phase != LogoPhase::Settled
    }

    fn schedule(&mut self) -> UiEffect {
        let id = self.timers.next_id();
        self.pending = Some(id);
        UiEffect::ScheduleTimer {
            id,
            after: self.half_step,
        }
    }
}
