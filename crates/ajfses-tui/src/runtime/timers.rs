//! Timer scheduling.
//!
//! Each scheduled timer is a tokio task racing a sleep against its
//! cancellation token. A timer that fires posts `UiEvent::TimerElapsed` to
//! the inbox and cancels its own token, which marks it finished.

use std::collections::HashMap;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use super::inbox::UiEventSender;
use crate::common::TimerId;
use crate::events::UiEvent;

pub struct TimerScheduler {
    tx: UiEventSender,
    active: HashMap<TimerId, CancellationToken>,
}

impl TimerScheduler {
    pub fn new(tx: UiEventSender) -> Self {
        Self {
            tx,
            active: HashMap::new(),
        }
    }

    /// Delivers `TimerElapsed(id)` after `after`, replacing any live timer
    /// with the same id.
    pub fn schedule(&mut self, id: TimerId, after: Duration) {
        self.active.retain(|_, token| !token.is_cancelled());

        let Ok(handle) = Handle::try_current() else {
            tracing::warn!(?id, "no async runtime; timer dropped");
            return;
        };

        let token = CancellationToken::new();
        if let Some(previous) = self.active.insert(id, token.clone()) {
            previous.cancel();
        }

        let tx = self.tx.clone();
        handle.spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(after) => {
                    let _ = tx.send(UiEvent::TimerElapsed(id));
                    token.cancel();
                }
            }
        });
        tracing::trace!(?id, ?after, "timer scheduled");
    }

    /// Cancels `id`. Unknown or finished ids are ignored.
    pub fn cancel(&mut self, id: TimerId) {
        if let Some(token) = self.active.remove(&id) {
            token.cancel();
        }
    }

    /// Returns true while any timer has not fired or been cancelled.
    pub fn has_pending(&self) -> bool {
        self.active.values().any(|token| !token.is_cancelled())
    }

    pub fn cancel_all(&mut self) {
        for (_, token) in self.active.drain() {
            token.cancel();
        }
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
