//! Reactive value sources and the subscription seam they share.
//!
//! ```text
//!   CountdownFlow    cold    every subscriber gets its own 10..=0 run
//!   ObservableValue  hot     replays latest, observers called inline on set
//!   StateStream      hot     replays latest, conflated through a watch channel
//!   BroadcastStream  hot     no replay, no current value
//! ```

mod broadcast;
mod countdown;
mod observable;
pub mod operators;
mod state_stream;
mod subscription;

pub use broadcast::{BroadcastStream, MutableBroadcast};
pub use countdown::{CountdownFlow, COUNTDOWN_START};
pub use observable::{MutableObservableValue, ObservableValue};
pub use state_stream::{MutableStateStream, StateStream};
pub use subscription::{observer, Observer, Subscribe, Subscription};
