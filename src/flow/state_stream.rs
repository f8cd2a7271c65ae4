use futures::stream::{Stream, StreamExt};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::flow::subscription::{Observer, Subscribe, Subscription};

/// Owner side of a state stream: a required initial value, conflated updates,
/// and no notification when the new value equals the current one.
pub struct MutableStateStream<T> {
    tx: watch::Sender<T>,
    runtime: Handle,
}

/// Read-only view of a [`MutableStateStream`].
#[derive(Clone)]
pub struct StateStream<T> {
    rx: watch::Receiver<T>,
    runtime: Handle,
}

impl<T> MutableStateStream<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T, runtime: Handle) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx, runtime }
    }

    pub fn set(&self, value: T) {
        self.tx.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        });
    }

    pub fn value(&self) -> T {
        self.tx.borrow().clone()
    }

    pub fn as_state_stream(&self) -> StateStream<T> {
        StateStream {
            rx: self.tx.subscribe(),
            runtime: self.runtime.clone(),
        }
    }
}

impl<T> StateStream<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn value(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Current value first, then every distinct change. Intermediate values
    /// set faster than the consumer polls are skipped.
    pub fn stream(&self) -> impl Stream<Item = T> + Send + 'static {
        WatchStream::new(self.rx.clone())
    }
}

impl<T> Subscribe<T> for StateStream<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn subscribe(&self, on_value: Observer<T>) -> Subscription {
        let updates = self.stream();
        let task = self.runtime.spawn(async move {
            updates
                .for_each(move |value| {
                    on_value(value);
                    futures::future::ready(())
                })
                .await;
        });
        Subscription::from_task(task)
    }
}
