use crate::mvi::ModelState;
use std::time::{Duration, Instant};

/// Timer lifecycle: Disabled (no interval configured), Stopped, Running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayState {
    #[default]
    Disabled,
    Stopped,
    Running {
        next_due: Instant,
        interval: Duration,
    },
}

impl ModelState for AutoplayState {}

impl AutoplayState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Instant of the next firing while running.
    pub fn next_due(&self) -> Option<Instant> {
        match self {
            Self::Running { next_due, .. } => Some(*next_due),
            _ => None,
        }
    }
}
