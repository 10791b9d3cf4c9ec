//! Headless carousel engine.
//!
//! [`Carousel`] cycles through a [`SlideSet`] and keeps three things in
//! step with its current index: the offset written to a [`Surface`], the
//! active flag of each [`Indicator`], and the autoplay cadence. Display
//! collaborators are injected through [`CarouselBuilder`]; any of them may
//! be missing, in which case that feature silently does nothing.
//!
//! The engine is single-threaded and cooperative. The host forwards input
//! with [`Carousel::handle`] and calls [`Carousel::poll`] once per display
//! frame; everything else happens synchronously inside those calls.

pub mod autoplay;
mod builder;
mod clock;
mod engine;
pub mod gesture;
mod indicators;
mod input;
pub mod nav;
mod relayout;
mod render;
mod slides;

pub use autoplay::{AutoplayController, AutoplayState};
pub use builder::{CarouselBuilder, Controls};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::Carousel;
pub use gesture::{GestureTracker, Swipe};
pub use indicators::{Indicator, IndicatorDisplay, IndicatorSync};
pub use input::CarouselEvent;
pub use nav::{wrap_index, NavIntent, NavState};
pub use relayout::RelayoutCoalescer;
pub use render::{
    measured_offset, proportional_offset, Measurement, Offset, OffsetModel, PositionRenderer,
    Surface,
};
pub use slides::SlideSet;
