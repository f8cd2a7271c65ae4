use futures::stream::{self, Stream, StreamExt};
use std::time::Duration;
use tokio::runtime::Handle;

use crate::flow::subscription::{Observer, Subscribe, Subscription};

/// First value every countdown run emits.
pub const COUNTDOWN_START: u32 = 10;

/// Cold, finite countdown: `10, 9, ..., 0`, one step per `interval`.
///
/// Nothing runs until a consumer polls [`stream`](Self::stream) or calls
/// [`subscribe`](Subscribe::subscribe). Each consumer drives its own run.
#[derive(Clone, Debug)]
pub struct CountdownFlow {
    interval: Duration,
    runtime: Handle,
}

impl CountdownFlow {
    pub fn new(interval: Duration, runtime: Handle) -> Self {
        Self { interval, runtime }
    }

    /// A fresh run of the countdown.
    ///
    /// The start value is yielded immediately; every later value is preceded
    /// by an asynchronous wait of one interval.
    pub fn stream(&self) -> impl Stream<Item = u32> + Send + 'static {
        let interval = self.interval;
        stream::unfold(Some((COUNTDOWN_START, true)), move |step| async move {
            let Some((value, first)) = step else {
                return None;
            };
            if !first {
                tokio::time::sleep(interval).await;
            }
            let next = value.checked_sub(1).map(|next| (next, false));
            Some((value, next))
        })
    }
}

impl Subscribe<u32> for CountdownFlow {
    fn subscribe(&self, on_value: Observer<u32>) -> Subscription {
        let run = self.stream();
        let task = self.runtime.spawn(async move {
            run.for_each(move |value| {
                on_value(value);
                futures::future::ready(())
            })
            .await;
        });
        Subscription::from_task(task)
    }
}
