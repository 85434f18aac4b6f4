//! Layout components (centered card, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form card gets
const CARD_MAX_WIDTH: u16 = 60;

/// Card title + subtitle, five fields, button, borders and spacing
pub const CARD_HEIGHT: u16 = 2 + 2 + 5 * 3 + 3 + 2;

/// Split the screen into the content area and the bottom status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center the form card inside the content area
pub fn card_area(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(CARD_HEIGHT)])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(row);
    card
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let state = if app.is_submitting() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Green))
    };
    spans.push(state);

    spans.push(Span::styled(
        format!(
            "Tab/↑↓:field  ←→:semester  Enter/{}:register  Esc:dismiss",
            crate::platform::SUBMIT_SHORTCUT
        ),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C/^Q:quit ";
    let hint_width = quit_hint.len() as u16;
    if area.width > hint_width {
        let hint_area = Rect {
            x: area.x + area.width - hint_width,
            y: area.y,
            width: hint_width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(quit_hint)
                .style(Style::default().bg(Color::DarkGray).fg(Color::Gray)),
            hint_area,
        );
    }
}
