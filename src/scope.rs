//! Cancellation scope tying spawned work to the lifetime of its owner.

use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Notify;

use crate::flow::Subscription;

/// Owns every subscription and task registered with it and tears all of them
/// down, exactly once, when closed or dropped.
pub struct Scope {
    name: &'static str,
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
    children: Mutex<Vec<Subscription>>,
    runtime: Handle,
}

impl Scope {
    pub fn new(name: &'static str, runtime: Handle) -> Self {
        Self {
            name,
            closed: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
            children: Mutex::new(Vec::new()),
            runtime,
        }
    }

    /// Take ownership of `subscription`. A closed scope cancels it on the spot.
    pub fn register(&self, subscription: Subscription) {
        if self.is_closed() {
            subscription.cancel();
            return;
        }
        self.children.lock().push(subscription);
    }

    /// Spawn `work` as a child of this scope.
    ///
    /// The task ends early when the scope closes. Nothing is spawned once the
    /// scope is closed.
    pub fn launch<F>(&self, label: &'static str, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.is_closed() {
            tracing::debug!(scope = self.name, label, "launch after close ignored");
            return;
        }
        let handle = self.handle();
        let scope = self.name;
        let task = self.runtime.spawn(async move {
            tokio::select! {
                () = work => tracing::debug!(scope, label, "task completed"),
                () = handle.closed() => tracing::debug!(scope, label, "task cancelled"),
            }
        });
        self.register(Subscription::from_task(task));
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Registered children that have not been torn down yet.
    pub fn active_children(&self) -> usize {
        self.children
            .lock()
            .iter()
            .filter(|child| !child.is_cancelled())
            .count()
    }

    /// Cancel every child. Later calls do nothing.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.notify.notify_waiters();
        let children = std::mem::take(&mut *self.children.lock());
        tracing::debug!(scope = self.name, children = children.len(), "closing scope");
        for child in children {
            child.cancel();
        }
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            closed: Arc::clone(&self.closed),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.close();
    }
}

/// Cloneable view used by tasks to observe the scope closing.
#[derive(Clone)]
pub struct ScopeHandle {
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub async fn closed(&self) {
        // Register interest before reading the flag so a close() between the
        // check and the await is not missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_closed() {
            return;
        }
        notified.await;
    }
}
