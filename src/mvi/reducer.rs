//! Reducer trait.

use super::intent::Intent;
use super::state::ModelState;

/// Pure transition function: `(State, Intent) -> State`.
///
/// Reducers never touch collaborators. Anything observable outside the
/// state value is done by whoever dispatched the intent.
pub trait Reducer {
    type State: ModelState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
