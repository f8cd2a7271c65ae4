//! State holder owning the four reactive sources.

mod report;

pub use report::{CollectStrategy, Report, ReportLog};

use futures::future;
use futures::stream::StreamExt;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::config::TimingConfig;
use crate::error::FlowError;
use crate::flow::operators::collect_latest;
use crate::flow::{
    BroadcastStream, CountdownFlow, MutableBroadcast, MutableObservableValue, MutableStateStream,
    ObservableValue, StateStream,
};
use crate::scope::Scope;

pub const INITIAL_OBSERVABLE_VALUE: &str = "KotlinLiveData";
pub const CHANGED_OBSERVABLE_VALUE: &str = "LiveData";
pub const INITIAL_STATE_VALUE: &str = "KotlinStateFlow";
pub const CHANGED_STATE_VALUE: &str = "StateFlow";
pub const BROADCAST_VALUE: &str = "SharedFlow";

/// Owns the countdown, the observable value, the state stream and the
/// broadcast stream for as long as it lives.
///
/// Construction starts three collectors on the countdown. They, and anything
/// else spawned here, are cancelled when the view model is dropped.
pub struct FlowViewModel {
    countdown: CountdownFlow,
    observable: MutableObservableValue<String>,
    state: MutableStateStream<String>,
    broadcast: MutableBroadcast<String>,
    reports: ReportLog,
    scope: Scope,
}

impl FlowViewModel {
    /// Build on the tokio runtime of the calling context.
    pub fn new(timing: &TimingConfig) -> Result<Self, FlowError> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_runtime(timing, runtime))
    }

    pub fn with_runtime(timing: &TimingConfig, runtime: Handle) -> Self {
        let view_model = Self {
            countdown: CountdownFlow::new(timing.countdown_interval(), runtime.clone()),
            observable: MutableObservableValue::new(INITIAL_OBSERVABLE_VALUE.to_string()),
            state: MutableStateStream::new(INITIAL_STATE_VALUE.to_string(), runtime.clone()),
            broadcast: MutableBroadcast::new(timing.broadcast_capacity, runtime.clone()),
            reports: ReportLog::new(),
            scope: Scope::new("view_model", runtime),
        };
        view_model.collect_in_view_model(timing.latest_report_delay());
        view_model
    }

    /// Three concurrent, independent runs of the countdown.
    fn collect_in_view_model(&self, latest_delay: Duration) {
        let reports = self.reports.clone();
        let doubled_thirds = self
            .countdown
            .stream()
            .filter(|value| future::ready(value % 3 == 0))
            .map(|value| value + value);
        self.scope.launch("filter_map", async move {
            doubled_thirds
                .for_each(|value| {
                    reports.record(CollectStrategy::FilterMap, value);
                    future::ready(())
                })
                .await;
        });

        let reports = self.reports.clone();
        let latest = self.countdown.stream();
        self.scope.launch("collect_latest", async move {
            collect_latest(latest, move |value| {
                let reports = reports.clone();
                async move {
                    tokio::time::sleep(latest_delay).await;
                    reports.record(CollectStrategy::CollectLatest, value);
                }
            })
            .await;
        });

        let reports = self.reports.clone();
        let tapped = self
            .countdown
            .stream()
            .inspect(move |value| reports.record(CollectStrategy::OnEach, *value));
        self.scope.launch("on_each", tapped.for_each(|_| future::ready(())));
    }

    pub fn countdown(&self) -> &CountdownFlow {
        &self.countdown
    }

    pub fn observable_value(&self) -> ObservableValue<String> {
        self.observable.as_observable()
    }

    pub fn state_stream(&self) -> StateStream<String> {
        self.state.as_state_stream()
    }

    pub fn broadcast_stream(&self) -> BroadcastStream<String> {
        self.broadcast.as_broadcast_stream()
    }

    /// Everything the internal collectors have reported so far.
    pub fn reports(&self) -> ReportLog {
        self.reports.clone()
    }

    /// Internal collectors still owned by the view model.
    pub fn active_tasks(&self) -> usize {
        self.scope.active_children()
    }

    pub fn change_observable_value(&self) {
        self.observable.set(CHANGED_OBSERVABLE_VALUE.to_string());
    }

    pub fn change_state_stream_value(&self) {
        self.state.set(CHANGED_STATE_VALUE.to_string());
    }

    /// Emitted before returning: observers subscribed now receive it, later
    /// ones never do.
    pub fn change_broadcast_value(&self) {
        let receivers = self.broadcast.emit(BROADCAST_VALUE.to_string());
        tracing::debug!(receivers, "broadcast value emitted");
    }
}

impl Drop for FlowViewModel {
    fn drop(&mut self) {
        tracing::debug!("view model cleared");
        self.scope.close();
    }
}
