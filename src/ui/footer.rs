use crate::config::ScreenKind;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for `active`. Buttons only exist on the values screen.
    pub fn hints(active: ScreenKind) -> &'static str {
        match active {
            ScreenKind::Countdown => " Tab: Switch screen │ q: Quit",
            ScreenKind::Values => {
                " Tab: Switch screen │ ↑/↓: Focus │ Enter/1-3: Press │ q: Quit"
            }
        }
    }

    pub fn widget(&self, active: ScreenKind, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(active);
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the separators are multi-byte
        let used = hints.chars().count() + version.chars().count();
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
