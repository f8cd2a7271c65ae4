use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pacing of the countdown and its collectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Wait between two countdown values (default: 1000).
    #[serde(default = "default_countdown_interval_ms")]
    pub countdown_interval_ms: u64,
    /// Wait before the latest-only collector reports a value (default: 1000).
    #[serde(default = "default_latest_report_delay_ms")]
    pub latest_report_delay_ms: u64,
    /// Buffered emissions per broadcast observer (default: 16).
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/poll cadence in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Screen shown at startup (default: values).
    #[serde(default)]
    pub start_screen: ScreenKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Countdown,
    #[default]
    Values,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file for the terminal UI. Defaults to `<data dir>/flowlab/flowlab.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl TimingConfig {
    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }

    pub fn latest_report_delay(&self) -> Duration {
        Duration::from_millis(self.latest_report_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("flowlab")
                .join("flowlab.log")
        })
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            countdown_interval_ms: default_countdown_interval_ms(),
            latest_report_delay_ms: default_latest_report_delay_ms(),
            broadcast_capacity: default_broadcast_capacity(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            start_screen: ScreenKind::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

fn default_countdown_interval_ms() -> u64 {
    1000
}

fn default_latest_report_delay_ms() -> u64 {
    1000
}

fn default_broadcast_capacity() -> usize {
    16
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}
