mod common;

use common::{pump, settle};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flowlab::config::{ScreenKind, TimingConfig};
use flowlab::ui::app::App;
use flowlab::ui::events::AppEvent;
use flowlab::ui::screen::Button;
use flowlab::view_model::{
    FlowViewModel, BROADCAST_VALUE, CHANGED_OBSERVABLE_VALUE, CHANGED_STATE_VALUE,
    INITIAL_OBSERVABLE_VALUE, INITIAL_STATE_VALUE,
};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

fn build_app(screen: ScreenKind) -> (App, Receiver<AppEvent>) {
    let vm = FlowViewModel::new(&TimingConfig::default()).expect("runtime available");
    let (tx, rx) = mpsc::channel();
    (App::new(vm, tx, screen), rx)
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[tokio::test(start_paused = true)]
async fn values_screen_shows_initial_values() {
    let (mut app, events) = build_app(ScreenKind::Values);
    settle().await;
    pump(&mut app, &events);

    let screen = app.screen();
    assert_eq!(screen.observable_text(), INITIAL_OBSERVABLE_VALUE);
    assert_eq!(screen.state_text(), INITIAL_STATE_VALUE);
    assert_eq!(screen.broadcast_value, "");
    assert_eq!(app.active_subscriptions(), 3);
}

#[tokio::test(start_paused = true)]
async fn digit_keys_press_buttons() {
    let (mut app, events) = build_app(ScreenKind::Values);
    settle().await;
    pump(&mut app, &events);

    for digit in ['1', '2', '3'] {
        app.handle_event(key(KeyCode::Char(digit)));
    }
    settle().await;
    pump(&mut app, &events);

    let screen = app.screen();
    assert_eq!(screen.observable_text(), CHANGED_OBSERVABLE_VALUE);
    assert_eq!(screen.state_text(), CHANGED_STATE_VALUE);
    assert_eq!(screen.broadcast_value, BROADCAST_VALUE);
    assert_eq!(screen.focused, Button::Broadcast);
}

#[tokio::test(start_paused = true)]
async fn enter_presses_the_focused_button() {
    let (mut app, events) = build_app(ScreenKind::Values);
    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Enter));
    settle().await;
    pump(&mut app, &events);

    assert_eq!(app.screen().focused, Button::StateStream);
    assert_eq!(app.screen().state_text(), CHANGED_STATE_VALUE);
    assert_eq!(app.screen().observable_text(), INITIAL_OBSERVABLE_VALUE);
}

#[tokio::test(start_paused = true)]
async fn countdown_screen_starts_at_ten_and_counts_down() {
    let (mut app, events) = build_app(ScreenKind::Countdown);
    assert_eq!(app.screen().countdown, 10);
    assert_eq!(app.active_subscriptions(), 1);

    tokio::time::sleep(Duration::from_millis(2500)).await;
    pump(&mut app, &events);
    assert_eq!(app.screen().countdown, 8);
}

#[tokio::test(start_paused = true)]
async fn returning_to_countdown_starts_a_fresh_run() {
    let (mut app, events) = build_app(ScreenKind::Countdown);
    tokio::time::sleep(Duration::from_millis(3500)).await;

    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.screen().active, ScreenKind::Values);
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.screen().active, ScreenKind::Countdown);

    // Ticks from the first run are still queued and must be ignored
    settle().await;
    pump(&mut app, &events);
    assert_eq!(app.screen().countdown, 10);

    tokio::time::sleep(Duration::from_secs(1)).await;
    pump(&mut app, &events);
    assert_eq!(app.screen().countdown, 9);
}

#[tokio::test(start_paused = true)]
async fn leaving_values_screen_releases_its_subscriptions() {
    let (mut app, events) = build_app(ScreenKind::Values);
    let observable = app.view_model().observable_value();
    let broadcast = app.view_model().broadcast_stream();
    assert_eq!(observable.observer_count(), 1);
    assert_eq!(broadcast.receiver_count(), 1);

    app.toggle_screen();
    settle().await;
    pump(&mut app, &events);

    assert_eq!(observable.observer_count(), 0);
    assert_eq!(broadcast.receiver_count(), 0);
    assert_eq!(app.active_subscriptions(), 1);
}

#[tokio::test(start_paused = true)]
async fn broadcast_sent_while_away_is_missed() {
    let (mut app, events) = build_app(ScreenKind::Values);
    app.handle_event(key(KeyCode::Char('3')));
    settle().await;
    pump(&mut app, &events);
    assert_eq!(app.screen().broadcast_value, BROADCAST_VALUE);

    app.toggle_screen();
    app.view_model().change_broadcast_value();
    app.view_model().change_observable_value();
    app.toggle_screen();
    settle().await;
    pump(&mut app, &events);

    assert_eq!(app.screen().broadcast_value, "");
    assert_eq!(app.screen().observable_text(), CHANGED_OBSERVABLE_VALUE);
}

#[tokio::test(start_paused = true)]
async fn buttons_are_inert_on_the_countdown_screen() {
    let (mut app, events) = build_app(ScreenKind::Countdown);
    app.handle_event(key(KeyCode::Char('1')));
    app.handle_event(key(KeyCode::Char('2')));

    assert_eq!(app.view_model().observable_value().value(), INITIAL_OBSERVABLE_VALUE);
    assert_eq!(app.view_model().state_stream().value(), INITIAL_STATE_VALUE);
    pump(&mut app, &events);
}

#[tokio::test(start_paused = true)]
async fn tick_refreshes_collector_reports() {
    let (mut app, _events) = build_app(ScreenKind::Countdown);
    tokio::time::sleep(Duration::from_millis(1500)).await;

    app.handle_event(AppEvent::Tick);
    assert!(!app.screen().recent_reports.is_empty());
    assert_eq!(
        app.screen().recent_reports,
        app.view_model().reports().recent(flowlab::ui::screen::RECENT_REPORTS)
    );
}

#[tokio::test(start_paused = true)]
async fn quit_keys_request_quit() {
    let (mut app, _events) = build_app(ScreenKind::Values);
    assert!(!app.should_quit());
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let (mut app, _events) = app_ctrl_c();
    assert!(app.should_quit());
    app.handle_event(AppEvent::Resize(100, 40));
    assert_eq!(app.size(), Some((100, 40)));
}

fn app_ctrl_c() -> (App, Receiver<AppEvent>) {
    let (mut app, events) = build_app(ScreenKind::Countdown);
    app.handle_event(AppEvent::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    (app, events)
}
