use crate::config::ScreenKind;
use crate::ui::mvi::Intent;
use crate::ui::screen::state::Button;
use crate::view_model::Report;

#[derive(Debug, Clone)]
pub enum ScreenIntent {
    /// A screen became active. Its labels fall back to their defaults until
    /// the fresh subscriptions deliver.
    Show(ScreenKind),
    CountdownTick(u32),
    ObservableChanged(String),
    StateChanged(String),
    BroadcastReceived(String),
    ReportsUpdated(Vec<Report>),
    FocusNext,
    FocusPrev,
    Focus(Button),
}

impl Intent for ScreenIntent {}
