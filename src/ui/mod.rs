//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration(frame, layout::card_area(content_area), app);
    layout::draw_status_bar(frame, status_area, app);

    // Toasts overlay everything else
    if !app.state.toasts.is_empty() {
        components::render_toasts(frame, app.state.toasts.iter());
    }
}
