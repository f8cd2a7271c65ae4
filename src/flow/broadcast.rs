use futures::stream::{Stream, StreamExt};
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream as ReceiverStream;

use crate::flow::subscription::{Observer, Subscribe, Subscription};

/// Owner side of a broadcast-only stream.
///
/// There is no current value. An emission reaches the receivers that exist at
/// the moment of the call and is gone afterwards.
pub struct MutableBroadcast<T> {
    tx: broadcast::Sender<T>,
    runtime: Handle,
}

/// Read-only view of a [`MutableBroadcast`].
#[derive(Clone)]
pub struct BroadcastStream<T> {
    tx: broadcast::Sender<T>,
    runtime: Handle,
}

impl<T> MutableBroadcast<T>
where
    T: Clone + Send + 'static,
{
    /// `capacity` is how many emissions a slow receiver may fall behind
    /// before it lags. Zero is raised to one.
    pub fn new(capacity: usize, runtime: Handle) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx, runtime }
    }

    /// Deliver `value` to every current receiver and return how many there
    /// were. With no receivers the value is dropped.
    pub fn emit(&self, value: T) -> usize {
        match self.tx.send(value) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::trace!("broadcast emitted with no active receivers; value dropped");
                0
            }
        }
    }

    pub fn as_broadcast_stream(&self) -> BroadcastStream<T> {
        BroadcastStream {
            tx: self.tx.clone(),
            runtime: self.runtime.clone(),
        }
    }
}

impl<T> BroadcastStream<T>
where
    T: Clone + Send + 'static,
{
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Emissions made after this call. The receiver is registered before the
    /// method returns, not when the stream is first polled.
    pub fn stream(&self) -> impl Stream<Item = T> + Send + 'static {
        ReceiverStream::new(self.tx.subscribe()).filter_map(|item| {
            futures::future::ready(match item {
                Ok(value) => Some(value),
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "broadcast observer lagged behind");
                    None
                }
            })
        })
    }
}

impl<T> Subscribe<T> for BroadcastStream<T>
where
    T: Clone + Send + 'static,
{
    fn subscribe(&self, on_value: Observer<T>) -> Subscription {
        let emissions = self.stream();
        let task = self.runtime.spawn(async move {
            emissions
                .for_each(move |value| {
                    on_value(value);
                    futures::future::ready(())
                })
                .await;
        });
        Subscription::from_task(task)
    }
}
