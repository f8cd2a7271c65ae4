use crate::config::ScreenKind;
use crate::flow::COUNTDOWN_START;
use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::state::ScreenState;

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::Show(ScreenKind::Countdown) => ScreenState {
                active: ScreenKind::Countdown,
                countdown: COUNTDOWN_START,
                ..state
            },
            ScreenIntent::Show(ScreenKind::Values) => ScreenState {
                active: ScreenKind::Values,
                observable_value: None,
                state_value: None,
                broadcast_value: String::new(),
                ..state
            },
            ScreenIntent::CountdownTick(value) => ScreenState {
                countdown: value,
                ..state
            },
            ScreenIntent::ObservableChanged(value) => ScreenState {
                observable_value: Some(value),
                ..state
            },
            ScreenIntent::StateChanged(value) => ScreenState {
                state_value: Some(value),
                ..state
            },
            ScreenIntent::BroadcastReceived(value) => ScreenState {
                broadcast_value: value,
                ..state
            },
            ScreenIntent::ReportsUpdated(recent_reports) => ScreenState {
                recent_reports,
                ..state
            },
            ScreenIntent::FocusNext => ScreenState {
                focused: state.focused.next(),
                ..state
            },
            ScreenIntent::FocusPrev => ScreenState {
                focused: state.focused.prev(),
                ..state
            },
            ScreenIntent::Focus(focused) => ScreenState { focused, ..state },
        }
    }
}
