use crate::config::UiConfig;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::view_model::FlowViewModel;
use std::io;

/// Drive the terminal UI until the user quits.
///
/// Must be called from a thread that has entered the tokio runtime the view
/// model was built on; subscriptions spawn onto it.
pub fn run(view_model: FlowViewModel, config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(view_model, events.sender(), config.start_screen);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Screen subscriptions and the view model go away before the terminal is restored
    drop(app);
    drop(guard);
    Ok(())
}
