use crate::mvi::Reducer;

use super::intent::NavIntent;
use super::state::NavState;

/// Map any integer onto `[0, len)` cyclically.
///
/// `wrap_index(-1, 5) == 4`, `wrap_index(7, 5) == 2`. Returns 0 for an
/// empty set.
pub fn wrap_index(target: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    usize::try_from(target.rem_euclid(len)).unwrap_or(0)
}

/// Wrapping navigation over [`NavState`].
///
/// Sets of zero or one slide never move.
pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if !state.can_navigate() {
            return state;
        }

        let current = i64::try_from(state.index()).unwrap_or(0);
        let target = match intent {
            NavIntent::GoTo(target) => target,
            NavIntent::Next => current.saturating_add(1),
            NavIntent::Prev => current.saturating_sub(1),
            NavIntent::First => 0,
            NavIntent::Last => -1,
        };

        NavState::at(wrap_index(target, state.len()), state.len())
    }
}
