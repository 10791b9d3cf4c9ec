//! Autoplay Controller.
//!
//! A repeating timer that advances the carousel. The timer is plain state
//! (`Running { next_due, .. }`); the engine asks [`AutoplayController::take_due`]
//! how many firings are owed each time the host polls it. Nothing fires unless
//! the state is `Running`, so [`AutoplayController::stop`] is a hard
//! cancellation.

mod intent;
mod reducer;
mod state;

pub use intent::AutoplayIntent;
pub use reducer::AutoplayReducer;
pub use state::AutoplayState;

use crate::mvi::dispatch;
use std::time::{Duration, Instant};

/// Timer owned by one carousel instance.
#[derive(Debug)]
pub struct AutoplayController {
    state: AutoplayState,
    interval: Option<Duration>,
    /// Set by an explicit user pause. While held, `start` does nothing.
    held: bool,
}

impl AutoplayController {
    /// `None` or a zero interval leaves the controller permanently disabled.
    pub fn new(interval: Option<Duration>) -> Self {
        let interval = interval.filter(|interval| !interval.is_zero());
        let state = if interval.is_some() {
            AutoplayState::Stopped
        } else {
            AutoplayState::Disabled
        };
        Self {
            state,
            interval,
            held: false,
        }
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Begin ticking from `now`. No-op when running, disabled, or held.
    pub fn start(&mut self, now: Instant) {
        if self.held {
            return;
        }
        let Some(interval) = self.interval else {
            return;
        };
        dispatch!(self, state, AutoplayReducer, AutoplayIntent::Start { now, interval });
    }

    /// Cancel any pending firing. Idempotent.
    pub fn stop(&mut self) {
        dispatch!(self, state, AutoplayReducer, AutoplayIntent::Stop);
    }

    /// Reset the cadence so the next firing is one full interval after `now`.
    pub fn restart(&mut self, now: Instant) {
        self.stop();
        self.start(now);
    }

    /// Stop and keep stopped until [`Self::release`].
    pub fn hold(&mut self) {
        self.held = true;
        self.stop();
    }

    /// Drop a user hold. The caller decides whether to start again.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Consume every firing owed at `now` and return how many there were.
    ///
    /// The schedule moves forward by exactly that many intervals, so a late
    /// poll still sees one firing per elapsed interval, all in one batch.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let AutoplayState::Running { next_due, interval } = self.state else {
            return 0;
        };
        if now < next_due {
            return 0;
        }
        let behind = now.duration_since(next_due).as_nanos() / interval.as_nanos().max(1);
        let count = u32::try_from(behind.saturating_add(1)).unwrap_or(u32::MAX);
        dispatch!(self, state, AutoplayReducer, AutoplayIntent::Fired { count });
        count
    }
}
