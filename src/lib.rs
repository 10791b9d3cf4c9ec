//! A carousel engine with a terminal front-end.
//!
//! The [`carousel`] module is the headless widget: index model, position
//! renderer, indicator synchronizer, autoplay controller, and input
//! adapter. The [`ui`] module drives one carousel inside a `ratatui`
//! terminal session.

pub mod carousel;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod shutdown;
pub mod ui;
