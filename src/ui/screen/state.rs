use crate::config::ScreenKind;
use crate::flow::COUNTDOWN_START;
use crate::ui::mvi::UiState;
use crate::view_model::Report;

/// Collector reports kept for the countdown screen.
pub const RECENT_REPORTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Button {
    #[default]
    ObservableValue,
    StateStream,
    Broadcast,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::ObservableValue, Button::StateStream, Button::Broadcast];

    pub fn label(&self) -> &'static str {
        match self {
            Button::ObservableValue => "LiveData Button",
            Button::StateStream => "StateFlow Button",
            Button::Broadcast => "SharedFlow Button",
        }
    }

    /// `1`, `2` and `3` press the buttons directly.
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Button::ObservableValue),
            '2' => Some(Button::StateStream),
            '3' => Some(Button::Broadcast),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Button::ObservableValue => Button::StateStream,
            Button::StateStream => Button::Broadcast,
            Button::Broadcast => Button::ObservableValue,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Button::ObservableValue => Button::Broadcast,
            Button::StateStream => Button::ObservableValue,
            Button::Broadcast => Button::StateStream,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub active: ScreenKind,
    /// Last countdown value; [`COUNTDOWN_START`] until the first emission.
    pub countdown: u32,
    pub observable_value: Option<String>,
    pub state_value: Option<String>,
    /// Last broadcast received while the values screen was up, or empty.
    pub broadcast_value: String,
    pub focused: Button,
    pub recent_reports: Vec<Report>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            active: ScreenKind::default(),
            countdown: COUNTDOWN_START,
            observable_value: None,
            state_value: None,
            broadcast_value: String::new(),
            focused: Button::default(),
            recent_reports: Vec::new(),
        }
    }
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn observable_text(&self) -> &str {
        self.observable_value.as_deref().unwrap_or("")
    }

    pub fn state_text(&self) -> &str {
        self.state_value.as_deref().unwrap_or("")
    }
}
