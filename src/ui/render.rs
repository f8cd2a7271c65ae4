use crate::config::ScreenKind;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::screen::{Button, ScreenState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const BUTTON_WIDTH: u16 = 24;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let screen = app.screen();

    frame.render_widget(Header::new().widget(screen.active), header);
    frame.render_widget(Clear, body);
    match screen.active {
        ScreenKind::Countdown => draw_countdown(frame, body, screen),
        ScreenKind::Values => draw_values(frame, body, screen),
    }
    frame.render_widget(Footer::new().widget(screen.active, footer), footer);
}

fn draw_countdown(frame: &mut Frame<'_>, body: Rect, screen: &ScreenState) {
    let counter = Paragraph::new(Line::from(Span::styled(
        screen.countdown.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(counter, centered_rect_by_size(body.width, 1, body));

    if screen.recent_reports.is_empty() || body.height < 4 {
        return;
    }

    let lines: Vec<Line> = screen
        .recent_reports
        .iter()
        .map(|report| {
            Line::from(vec![
                Span::styled(
                    format!("{:<16}", report.strategy.as_str()),
                    Style::default().fg(HEADER_SEPARATOR),
                ),
                Span::styled(report.value.to_string(), Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect();
    let height = (lines.len() as u16 + 2).min(body.height / 2);
    let reports_area = Rect {
        x: body.x,
        y: body.y + body.height.saturating_sub(height),
        width: body.width,
        height,
    };
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Collector reports ")
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        reports_area,
    );
}

fn draw_values(frame: &mut Frame<'_>, body: Rect, screen: &ScreenState) {
    // label, button, spacer; three times
    let column = centered_rect_by_size(BUTTON_WIDTH, 3 * 4, body);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(column);

    let labels = [
        screen.observable_text(),
        screen.state_text(),
        screen.broadcast_value.as_str(),
    ];
    for (index, (button, label)) in Button::ALL.iter().zip(labels).enumerate() {
        let label_row = rows[index * 3];
        let button_row = rows[index * 3 + 1];
        frame.render_widget(
            Paragraph::new(label.to_string()).style(Style::default().fg(STATUS_OK)),
            label_row,
        );
        frame.render_widget(button_widget(*button, screen.focused == *button), button_row);
    }
}

fn button_widget(button: Button, focused: bool) -> Paragraph<'static> {
    let style = if focused {
        Style::default()
            .fg(ACCENT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let marker = if focused { "▶ " } else { "  " };
    Paragraph::new(Line::from(vec![
        Span::styled(marker, style),
        Span::styled(format!("[ {} ]", button.label()), style),
    ]))
}
