//! Model-View-Intent (MVI) primitives shared by the carousel's state machines.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Render
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: plain value describing one state machine (index, timer)
//! - **Intent**: navigation request, timer firing, start/stop request
//! - **Reducer**: pure function mapping `(State, Intent)` to the next state
//!
//! Side effects (committing offsets, painting indicators) happen in the
//! engine around a dispatch, never inside a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ModelState;

/// Run a reducer over a state field in place.
macro_rules! dispatch {
    ($owner:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $owner.$field = <$reducer as $crate::mvi::Reducer>::reduce(
            std::mem::take(&mut $owner.$field),
            $intent,
        );
    };
}

pub(crate) use dispatch;
