use crate::mvi::Intent;

/// Navigation requests accepted by [`super::NavReducer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Jump to an arbitrary position. Out-of-range values wrap.
    GoTo(i64),
    Next,
    Prev,
    First,
    Last,
}

impl Intent for NavIntent {}
