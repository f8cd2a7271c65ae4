//! Consumption operators over [`Stream`]s.

use futures::stream::{Stream, StreamExt};
use std::future::Future;
use std::pin::{pin, Pin};

enum Step<T> {
    Next(Option<T>),
    ActionDone,
}

/// Run `action` for each item, abandoning the in-flight action as soon as a
/// newer item arrives.
///
/// When the upstream yields a new item on the same poll that the pending
/// action would complete, the new item wins and the old action is dropped.
/// After the upstream ends, the action for the last item runs to completion.
pub async fn collect_latest<S, F, Fut>(stream: S, mut action: F)
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut stream = pin!(stream);
    let mut pending: Option<Pin<Box<Fut>>> = None;

    loop {
        let step = match pending.as_mut() {
            Some(running) => tokio::select! {
                biased;
                item = stream.next() => Step::Next(item),
                () = running.as_mut() => Step::ActionDone,
            },
            None => Step::Next(stream.next().await),
        };

        match step {
            Step::Next(Some(item)) => pending = Some(Box::pin(action(item))),
            Step::Next(None) => {
                if let Some(last) = pending.take() {
                    last.await;
                }
                return;
            }
            Step::ActionDone => pending = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::collect_latest;
    use futures::stream::{self, StreamExt};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn slow_action_only_completes_for_last_item() {
        let done = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&done);
        let ticks = stream::iter(0..5).then(|n| async move {
            if n > 0 {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            n
        });

        collect_latest(ticks, |n| {
            let sink = Arc::clone(&sink);
            async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                sink.lock().push(n);
            }
        })
        .await;

        assert_eq!(*done.lock(), vec![4]);
    }

    #[tokio::test(start_paused = true)]
    async fn fast_action_completes_for_every_item() {
        let done = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&done);
        let ticks = stream::iter(0..4).then(|n| async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            n
        });

        collect_latest(ticks, |n| {
            let sink = Arc::clone(&sink);
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                sink.lock().push(n);
            }
        })
        .await;

        assert_eq!(*done.lock(), vec![0, 1, 2, 3]);
    }
}
