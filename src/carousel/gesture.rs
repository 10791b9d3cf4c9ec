//! Swipe gesture tracking.

/// Outcome of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged toward the next slide (negative delta).
    Next,
    /// Dragged toward the previous slide (positive delta).
    Prev,
    /// Moved less than the threshold.
    Tap,
}

/// Classify a drag of `delta` surface units.
pub fn classify(delta: f64, threshold: f64) -> Swipe {
    if !delta.is_finite() || delta.abs() < threshold {
        Swipe::Tap
    } else if delta < 0.0 {
        Swipe::Next
    } else {
        Swipe::Prev
    }
}

/// State of one in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureSession {
    start_x: f64,
}

#[derive(Debug)]
pub struct GestureTracker {
    threshold: f64,
    session: Option<GestureSession>,
}

impl GestureTracker {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() && threshold >= 0.0 {
            threshold
        } else {
            0.0
        };
        Self {
            threshold,
            session: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session at `x`, replacing any session already open.
    pub fn begin(&mut self, x: f64) {
        if !x.is_finite() {
            tracing::debug!(x, "ignoring gesture with non-finite start");
            self.session = None;
            return;
        }
        self.session = Some(GestureSession { start_x: x });
    }

    /// Close the session and classify it. `None` when no session was open.
    pub fn end(&mut self, x: f64) -> Option<Swipe> {
        let session = self.session.take()?;
        Some(classify(x - session.start_x, self.threshold))
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }
}
