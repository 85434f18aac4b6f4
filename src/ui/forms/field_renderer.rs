//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if field.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let content = if field.is_choice() {
        choice_line(field, is_active, value_style)
    } else {
        let cursor = if is_active { "▌" } else { "" };
        // The cursor sits before the placeholder, after a typed value
        if field.is_empty() {
            Line::from(vec![
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
                Span::styled(field.display_value(), value_style),
            ])
        } else {
            Line::from(vec![
                Span::styled(field.display_value(), value_style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])
        }
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// A select control: `‹ 5 ›` when focused, value or placeholder otherwise
fn choice_line<'a>(field: &'a FormField, is_active: bool, value_style: Style) -> Line<'a> {
    let arrow_style = Style::default().fg(Color::Cyan);
    if is_active {
        Line::from(vec![
            Span::styled("‹ ", arrow_style),
            Span::styled(field.display_value(), value_style),
            Span::styled(" ›", arrow_style),
        ])
    } else {
        Line::from(vec![
            Span::styled(field.display_value(), value_style),
            Span::styled(" ▾", Style::default().fg(Color::DarkGray)),
        ])
    }
}
