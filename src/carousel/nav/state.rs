use crate::mvi::ModelState;

/// Current index within a slide set of fixed length.
///
/// `index < len` holds whenever `len > 0`. An empty set keeps index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    index: usize,
    len: usize,
}

impl ModelState for NavState {}

impl NavState {
    /// Fresh state for `len` slides, positioned on the first one.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub(super) fn at(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Navigation only moves anything with two or more slides.
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_zero() {
        let state = NavState::new(4);
        assert_eq!(state.index(), 0);
        assert_eq!(state.len(), 4);
        assert!(state.can_navigate());
    }

    #[test]
    fn single_slide_cannot_navigate() {
        assert!(!NavState::new(1).can_navigate());
        assert!(!NavState::new(0).can_navigate());
        assert!(NavState::new(0).is_empty());
    }
}
