mod regions;
mod timer;

pub use regions::{RegionId, RegionTree};
pub use timer::{TimerId, TimerOwner, TimerSeq};
