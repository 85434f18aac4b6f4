//! Registration form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "Registration Form";
const DESCRIPTION: &str = "Please fill out all the fields to register.";

/// Draw the registration card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(1),             // Description
            Constraint::Length(1),             // Spacing
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // College
            Constraint::Length(3),             // Semester
            Constraint::Length(3),             // Roll number
            Constraint::Length(1),             // Spacing
            Constraint::Length(BUTTON_HEIGHT), // Register
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(TITLE))
            .style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(DESCRIPTION)).style(Style::default().fg(Color::Gray)),
        chunks[1],
    );

    for (idx, name) in FieldName::ALL.into_iter().enumerate() {
        draw_field(
            frame,
            chunks[3 + idx],
            form.field(name),
            form.active_field_index == idx,
        );
    }

    let label = if app.is_submitting() {
        "Registering..."
    } else {
        "Register"
    };
    render_button(
        frame,
        chunks[9],
        label,
        form.is_submit_button_active(),
        !app.is_submitting(),
    );
}
