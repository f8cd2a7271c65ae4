use parking_lot::{Mutex, ReentrantMutex};
use std::sync::{Arc, Weak};

use crate::flow::subscription::{Observer, Subscribe, Subscription};

struct Inner<T> {
    value: T,
    next_id: u64,
    observers: Vec<(u64, Observer<T>)>,
}

struct Shared<T> {
    /// Held across every delivery, so a replay and a notification never
    /// interleave. Reentrant: an observer may call `set` from its callback.
    dispatch: ReentrantMutex<()>,
    inner: Mutex<Inner<T>>,
}

/// Owner side of an observable value. Always holds a value.
///
/// Observers are invoked synchronously on the thread that calls
/// [`set`](Self::set), after the state lock has been released.
pub struct MutableObservableValue<T> {
    shared: Arc<Shared<T>>,
}

/// Read-only view of a [`MutableObservableValue`].
#[derive(Clone)]
pub struct ObservableValue<T> {
    shared: Arc<Shared<T>>,
}

impl<T> MutableObservableValue<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                dispatch: ReentrantMutex::new(()),
                inner: Mutex::new(Inner {
                    value: initial,
                    next_id: 0,
                    observers: Vec::new(),
                }),
            }),
        }
    }

    /// Replace the value. Observers are only notified when it differs from
    /// the current one.
    pub fn set(&self, value: T) {
        let _dispatch = self.shared.dispatch.lock();
        let observers = {
            let mut inner = self.shared.inner.lock();
            if inner.value == value {
                return;
            }
            inner.value = value.clone();
            inner
                .observers
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect::<Vec<_>>()
        };
        for observer in observers {
            observer(value.clone());
        }
    }

    pub fn value(&self) -> T {
        self.shared.inner.lock().value.clone()
    }

    pub fn as_observable(&self) -> ObservableValue<T> {
        ObservableValue {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> ObservableValue<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    pub fn value(&self) -> T {
        self.shared.inner.lock().value.clone()
    }

    pub fn observer_count(&self) -> usize {
        self.shared.inner.lock().observers.len()
    }
}

impl<T> Subscribe<T> for ObservableValue<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Registers `on_value` and immediately replays the current value to it.
    /// A concurrent `set` waits until the replay has returned.
    fn subscribe(&self, on_value: Observer<T>) -> Subscription {
        let _dispatch = self.shared.dispatch.lock();
        let (id, current) = {
            let mut inner = self.shared.inner.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Arc::clone(&on_value)));
            (id, inner.value.clone())
        };
        on_value(current);

        let weak: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.inner.lock().observers.retain(|(other, _)| *other != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::MutableObservableValue;
    use crate::flow::{observer, Subscribe};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, crate::flow::Observer<String>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, observer(move |value: String| sink.lock().push(value)))
    }

    #[test]
    fn subscribe_replays_current_value() {
        let holder = MutableObservableValue::new("first".to_string());
        let (seen, on_value) = recorder();
        let _sub = holder.as_observable().subscribe(on_value);
        assert_eq!(*seen.lock(), vec!["first".to_string()]);
    }

    #[test]
    fn equal_value_is_not_redelivered() {
        let holder = MutableObservableValue::new("a".to_string());
        let (seen, on_value) = recorder();
        let _sub = holder.as_observable().subscribe(on_value);

        holder.set("b".to_string());
        holder.set("b".to_string());

        assert_eq!(*seen.lock(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn cancelled_observer_stops_receiving() {
        let holder = MutableObservableValue::new(1_u32);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let observable = holder.as_observable();
        let sub = observable.subscribe(observer(move |v| sink.lock().push(v)));

        sub.cancel();
        holder.set(2);

        assert_eq!(*seen.lock(), vec![1]);
        assert_eq!(observable.observer_count(), 0);
    }

    #[test]
    fn concurrent_set_lands_after_the_replay() {
        let holder = Arc::new(MutableObservableValue::new("old".to_string()));
        let barrier = Arc::new(Barrier::new(2));

        let setter = {
            let holder = Arc::clone(&holder);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                holder.set("new".to_string());
            })
        };

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let replaying = AtomicBool::new(true);
        let _sub = holder
            .as_observable()
            .subscribe(observer(move |value: String| {
                if replaying.swap(false, Ordering::SeqCst) {
                    // Let the setter run while the replay is still in flight
                    barrier.wait();
                    thread::sleep(Duration::from_millis(50));
                }
                sink.lock().push(value);
            }));
        setter.join().unwrap();

        assert_eq!(*seen.lock(), vec!["old".to_string(), "new".to_string()]);
        assert_eq!(seen.lock().last().cloned(), Some(holder.value()));
    }

    #[test]
    fn observer_may_set_from_its_callback() {
        let holder = Arc::new(MutableObservableValue::new(0_u32));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let inner_holder = Arc::clone(&holder);
        let _sub = holder.as_observable().subscribe(observer(move |v: u32| {
            sink.lock().push(v);
            if v == 1 {
                inner_holder.set(2);
            }
        }));

        holder.set(1);

        assert_eq!(*seen.lock(), vec![0, 1, 2]);
        assert_eq!(holder.value(), 2);
    }
}
