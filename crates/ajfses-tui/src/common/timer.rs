//! Timer identities.
//!
//! Every scheduled timer gets a fresh id tagged with the feature that owns
//! it, so the reducer can route `TimerElapsed` events and each owner can tell
//! its current timer apart from one it has already superseded.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerOwner {
    Overlay,
    Logo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId {
    pub owner: TimerOwner,
    pub seq: u64,
}

/// Per-owner id generator.
#[derive(Debug)]
pub struct TimerSeq {
    owner: TimerOwner,
    next: u64,
}

impl TimerSeq {
    pub fn new(owner: TimerOwner) -> Self {
        Self { owner, next: 0 }
    }

    pub fn next_id(&mut self) -> TimerId {
        let id = TimerId {
            owner: self.owner,
            seq: self.next,
        };
        self.next = self.next.wrapping_add(1);
        id
    }
}
