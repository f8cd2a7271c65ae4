use crate::config::ScreenKind;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, active: ScreenKind) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let tab = |label: &'static str, screen: ScreenKind| {
            if screen == active {
                Span::styled(label, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                Span::styled(label, text_style)
            }
        };
        let line = Line::from(vec![
            Span::styled("  flowlab", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            tab("Countdown", ScreenKind::Countdown),
            Span::styled("  │  ", separator_style),
            tab("Values", ScreenKind::Values),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
