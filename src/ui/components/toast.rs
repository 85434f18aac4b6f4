//! Toast overlay component

use crate::state::{Toast, ToastVariant};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of a toast
const TOAST_MAX_WIDTH: u16 = 44;

/// Render toasts stacked in the top-right corner, newest on top
pub fn render_toasts<'a>(frame: &mut Frame, toasts: impl DoubleEndedIterator<Item = &'a Toast>) {
    let area = frame.area();
    let mut y = area.y + 1;

    for toast in toasts.rev() {
        let toast_area = toast_rect(area, y, toast);
        if toast_area.height == 0 {
            break;
        }
        render_toast(frame, toast_area, toast);
        y = toast_area.bottom();
    }
}

/// Size and place one toast below row `y`
fn toast_rect(area: Rect, y: u16, toast: &Toast) -> Rect {
    let padding = 2u16; // one space each side
    let width = TOAST_MAX_WIDTH.min(area.width.saturating_sub(2));
    let max_line_width = width.saturating_sub(padding + 2) as usize;
    let line_count = wrap_text(&toast.description, max_line_width).len() as u16;

    // Title + message lines + borders
    let height = 1 + line_count + 2;
    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y,
        width,
        height: height.min(area.bottom().saturating_sub(y)),
    }
}

fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let (accent, background) = match toast.variant {
        ToastVariant::Default => (Color::Green, Color::Black),
        ToastVariant::Destructive => (Color::White, Color::Red),
    };

    frame.render_widget(Clear, area);

    let max_line_width = area.width.saturating_sub(4) as usize;
    let mut content = vec![Line::from(Span::styled(
        format!(" {}", toast.title),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))];
    for line in wrap_text(&toast.description, max_line_width) {
        content.push(Line::from(format!(" {line}")));
    }

    let toast_widget = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(background)),
        )
        .style(Style::default().bg(background).fg(Color::White));

    frame.render_widget(toast_widget, area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.len() + word.len() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
