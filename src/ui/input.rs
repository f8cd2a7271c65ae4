use crate::ui::app::App;
use crate::ui::screen::Button;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.toggle_screen(),
        KeyCode::Up => app.focus_prev(),
        KeyCode::Down => app.focus_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.press_focused(),
        KeyCode::Char(ch) => {
            if let Some(button) = Button::from_digit(ch) {
                app.press(button);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
