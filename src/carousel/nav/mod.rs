//! Index Model.
//!
//! Owns the current slide index and the wrap-around arithmetic. Every
//! navigation the engine performs goes through [`NavReducer`].
//!
//! - `state.rs` - current index and slide count
//! - `intent.rs` - navigation requests (go to, next, prev, first, last)
//! - `reducer.rs` - wrapping transitions

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::{wrap_index, NavReducer};
pub use state::NavState;
