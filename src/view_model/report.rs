use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// How one of the view model's internal collectors consumes the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectStrategy {
    /// Keeps multiples of 3, doubles them, then reports.
    FilterMap,
    /// Waits before reporting; a newer value cancels the pending report.
    CollectLatest,
    /// Reports every value as it passes through.
    OnEach,
}

impl CollectStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectStrategy::FilterMap => "filter_map",
            CollectStrategy::CollectLatest => "collect_latest",
            CollectStrategy::OnEach => "on_each",
        }
    }
}

impl fmt::Display for CollectStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub strategy: CollectStrategy,
    pub value: u32,
}

/// Append-only record of what the internal collectors reported.
#[derive(Clone, Default)]
pub struct ReportLog {
    entries: Arc<Mutex<Vec<Report>>>,
}

impl ReportLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, strategy: CollectStrategy, value: u32) {
        tracing::info!(
            target: "flowlab::collector",
            strategy = strategy.as_str(),
            value,
            "counter is: {}",
            value
        );
        self.entries.lock().push(Report { strategy, value });
    }

    pub fn snapshot(&self) -> Vec<Report> {
        self.entries.lock().clone()
    }

    /// Values reported by one strategy, in arrival order.
    pub fn values(&self, strategy: CollectStrategy) -> Vec<u32> {
        self.entries
            .lock()
            .iter()
            .filter(|report| report.strategy == strategy)
            .map(|report| report.value)
            .collect()
    }

    /// The `count` most recent reports, oldest first.
    pub fn recent(&self, count: usize) -> Vec<Report> {
        let entries = self.entries.lock();
        let start = entries.len().saturating_sub(count);
        entries[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
