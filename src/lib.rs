//! Reactive value-stream primitives and a terminal front-end that renders them.
//!
//! The [`view_model::FlowViewModel`] owns one source of each kind:
//!
//! - a cold [`flow::CountdownFlow`] that restarts from 10 for every observer,
//! - an [`flow::ObservableValue`] with synchronous, replay-latest observers,
//! - a [`flow::StateStream`] backed by a conflating watch channel,
//! - a [`flow::BroadcastStream`] that only reaches observers present at emission.
//!
//! The [`ui`] module subscribes to those sources and forwards key presses back
//! to the view model as commands.

pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod scope;
pub mod ui;
pub mod view_model;

pub use error::FlowError;
