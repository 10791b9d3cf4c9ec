//! Coalesces surface-size changes into at most one re-render per frame.

/// Pending re-measure flag. Any number of requests between two frames
/// collapse into one; the last request is never dropped because the flag
/// stays set until the next frame takes it.
#[derive(Debug, Default)]
pub struct RelayoutCoalescer {
    pending: bool,
}

impl RelayoutCoalescer {
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Take the pending flag. True at most once per batch of requests.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_requests_yield_one_take() {
        let mut relayout = RelayoutCoalescer::default();
        relayout.request();
        relayout.request();
        relayout.request();
        assert!(relayout.take());
        assert!(!relayout.take());
    }

    #[test]
    fn request_after_take_is_pending_again() {
        let mut relayout = RelayoutCoalescer::default();
        relayout.request();
        assert!(relayout.take());
        relayout.request();
        assert!(relayout.is_pending());
    }

    #[test]
    fn clear_drops_pending() {
        let mut relayout = RelayoutCoalescer::default();
        relayout.request();
        relayout.clear();
        assert!(!relayout.take());
    }
}
