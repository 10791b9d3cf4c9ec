use crate::mvi::Reducer;

use super::intent::AutoplayIntent;
use super::state::AutoplayState;

pub struct AutoplayReducer;

impl Reducer for AutoplayReducer {
    type State = AutoplayState;
    type Intent = AutoplayIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AutoplayIntent::Start { now, interval } => match state {
                AutoplayState::Stopped => match now.checked_add(interval) {
                    Some(next_due) => AutoplayState::Running { next_due, interval },
                    None => AutoplayState::Stopped,
                },
                other => other,
            },

            AutoplayIntent::Stop => match state {
                AutoplayState::Running { .. } => AutoplayState::Stopped,
                other => other,
            },

            AutoplayIntent::Fired { count } => match state {
                AutoplayState::Running { next_due, interval } => {
                    match next_due.checked_add(interval.saturating_mul(count)) {
                        Some(next_due) => AutoplayState::Running { next_due, interval },
                        None => AutoplayState::Stopped,
                    }
                }
                other => other,
            },
        }
    }
}
