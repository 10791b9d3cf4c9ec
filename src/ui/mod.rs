//! Terminal host: draws the carousel with ratatui and feeds it crossterm
//! key, mouse and resize events.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod surface;
pub mod terminal_guard;
pub mod theme;
pub mod track;

pub use app::App;
pub use runtime::run;
