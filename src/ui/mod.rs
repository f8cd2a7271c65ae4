//! Terminal presentation layer.
//!
//! Renders the latest value of each source and turns button presses into
//! view model commands.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;
