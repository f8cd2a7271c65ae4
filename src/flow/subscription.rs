use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Callback invoked with every value a source delivers.
pub type Observer<T> = Arc<dyn Fn(T) + Send + Sync + 'static>;

/// Wrap a closure as an [`Observer`].
pub fn observer<T, F>(on_value: F) -> Observer<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    Arc::new(on_value)
}

/// A source that can be observed through a callback.
pub trait Subscribe<T> {
    /// Start delivering values to `on_value` until the returned handle is
    /// cancelled or dropped.
    fn subscribe(&self, on_value: Observer<T>) -> Subscription;
}

type Teardown = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a live subscription.
///
/// The teardown runs at most once: on the first [`cancel`](Self::cancel) or
/// on drop, whichever comes first.
pub struct Subscription {
    teardown: Mutex<Option<Teardown>>,
}

impl Subscription {
    pub fn new<F: FnOnce() + Send + 'static>(teardown: F) -> Self {
        Self {
            teardown: Mutex::new(Some(Box::new(teardown))),
        }
    }

    /// Subscription backed by a spawned task; cancelling aborts the task.
    pub fn from_task(task: JoinHandle<()>) -> Self {
        let abort = task.abort_handle();
        Self::new(move || abort.abort())
    }

    /// Tear the subscription down. Safe to call any number of times.
    pub fn cancel(&self) {
        let teardown = self.teardown.lock().take();
        if let Some(teardown) = teardown {
            teardown();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.teardown.lock().is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Subscription;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn cancel_runs_teardown_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sub = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!sub.is_cancelled());
        sub.cancel();
        sub.cancel();
        drop(sub);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_cancels() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        drop(Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
