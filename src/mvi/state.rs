//! Marker trait for reducer-owned state.

/// State owned by a reducer.
///
/// `Default` lets the dispatcher move the value out with `mem::take`
/// while the reducer runs.
pub trait ModelState: Clone + PartialEq + Default + Send + 'static {}
