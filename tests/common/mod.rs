//! Shared test helpers.

#![allow(dead_code)]

use flowlab::flow::{observer, Observer};
use flowlab::ui::app::App;
use flowlab::ui::events::AppEvent;
use parking_lot::Mutex;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

pub type Seen<T> = Arc<Mutex<Vec<T>>>;

/// Observer that appends every delivered value to a shared vector.
pub fn recorder<T: Send + 'static>() -> (Seen<T>, Observer<T>) {
    let seen: Seen<T> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, observer(move |value| sink.lock().push(value)))
}

/// Let spawned subscription tasks drain their channels without reaching the
/// countdown's one-second timers.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

/// Feed every queued event into the app.
pub fn pump(app: &mut App, events: &Receiver<AppEvent>) {
    while let Ok(event) = events.try_recv() {
        app.handle_event(event);
    }
}

pub fn countdown_values() -> Vec<u32> {
    (0..=10).rev().collect()
}
