use crate::config::ScreenKind;
use crate::flow::{observer, Subscribe, Subscription};
use crate::ui::events::{AppEvent, SourceUpdate};
use crate::ui::mvi::Reducer;
use crate::ui::screen::{Button, ScreenIntent, ScreenReducer, ScreenState, RECENT_REPORTS};
use crate::view_model::FlowViewModel;
use std::sync::mpsc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// What the active screen renders (MVI pattern).
    screen: ScreenState,
    view_model: FlowViewModel,
    /// Subscriptions of the active screen; replaced on every screen switch.
    subscriptions: Vec<Subscription>,
    /// Bumped on every screen switch to drop late values from old subscriptions.
    generation: u64,
    events: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(
        view_model: FlowViewModel,
        events: mpsc::Sender<AppEvent>,
        start_screen: ScreenKind,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            size: None,
            screen: ScreenState::default(),
            view_model,
            subscriptions: Vec::new(),
            generation: 0,
            events,
        };
        app.show_screen(start_screen);
        app
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn view_model(&self) -> &FlowViewModel {
        &self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    /// Swap the active screen, tearing down the old screen's subscriptions
    /// and starting the new one's.
    pub fn show_screen(&mut self, screen: ScreenKind) {
        self.subscriptions.clear();
        self.generation += 1;
        tracing::debug!(?screen, generation = self.generation, "showing screen");
        dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::Show(screen));

        let subscriptions = match screen {
            ScreenKind::Countdown => vec![self
                .view_model
                .countdown()
                .subscribe(self.forward(SourceUpdate::Countdown))],
            ScreenKind::Values => vec![
                self.view_model
                    .observable_value()
                    .subscribe(self.forward(SourceUpdate::Observable)),
                self.view_model
                    .state_stream()
                    .subscribe(self.forward(SourceUpdate::State)),
                self.view_model
                    .broadcast_stream()
                    .subscribe(self.forward(SourceUpdate::Broadcast)),
            ],
        };
        self.subscriptions = subscriptions;
    }

    pub fn toggle_screen(&mut self) {
        let next = match self.screen.active {
            ScreenKind::Countdown => ScreenKind::Values,
            ScreenKind::Values => ScreenKind::Countdown,
        };
        self.show_screen(next);
    }

    /// Observer that posts each value to the event loop under the current
    /// generation.
    fn forward<T, F>(&self, wrap: F) -> crate::flow::Observer<T>
    where
        F: Fn(T) -> SourceUpdate + Send + Sync + 'static,
    {
        let events = self.events.clone();
        let generation = self.generation;
        observer(move |value| {
            let _ = events.send(AppEvent::Source {
                generation,
                update: wrap(value),
            });
        })
    }

    pub fn on_source(&mut self, generation: u64, update: SourceUpdate) {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale source update dropped");
            return;
        }
        let intent = match update {
            SourceUpdate::Countdown(value) => ScreenIntent::CountdownTick(value),
            SourceUpdate::Observable(value) => ScreenIntent::ObservableChanged(value),
            SourceUpdate::State(value) => ScreenIntent::StateChanged(value),
            SourceUpdate::Broadcast(value) => ScreenIntent::BroadcastReceived(value),
        };
        dispatch_mvi!(self, screen, ScreenReducer, intent);
    }

    pub fn on_tick(&mut self) {
        let recent = self.view_model.reports().recent(RECENT_REPORTS);
        if recent != self.screen.recent_reports {
            dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::ReportsUpdated(recent));
        }
    }

    pub fn focus_next(&mut self) {
        dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::FocusPrev);
    }

    /// Fire-and-forget: every button maps to exactly one view model command.
    pub fn press(&mut self, button: Button) {
        if self.screen.active != ScreenKind::Values {
            return;
        }
        dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::Focus(button));
        match button {
            Button::ObservableValue => self.view_model.change_observable_value(),
            Button::StateStream => self.view_model.change_state_stream_value(),
            Button::Broadcast => self.view_model.change_broadcast_value(),
        }
    }

    pub fn press_focused(&mut self) {
        self.press(self.screen.focused);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => crate::ui::input::handle_key(self, key),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::Source { generation, update } => self.on_source(generation, update),
        }
    }
}
