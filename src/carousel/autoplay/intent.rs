use crate::mvi::Intent;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayIntent {
    /// Schedule the first firing one interval after `now`.
    Start { now: Instant, interval: Duration },
    Stop,
    /// `count` scheduled instants were reached and the carousel advanced
    /// that many steps.
    Fired { count: u32 },
}

impl Intent for AutoplayIntent {}
