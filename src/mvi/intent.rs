//! Marker trait for intents.

/// Something that asks a state machine to move.
///
/// Intents come from two places:
/// - user input adapted by the engine (button, indicator, gesture)
/// - the host loop (timer firings, start/stop requests)
pub trait Intent: Send + 'static {}
