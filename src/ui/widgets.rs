//! Small shared rendering helpers.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::forms::FormState;
use crate::store::LoadState;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Spinner frames for the loading indicator.
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// One spinner character advanced by the tick counter.
pub fn spinner(tick: u64) -> char {
    SPINNER[(tick as usize) % SPINNER.len()]
}

/// Short load-state tag for a table title, e.g. `" [loading |]"`.
pub fn state_tag(state: LoadState, tick: u64) -> String {
    match state {
        LoadState::Idle => String::new(),
        LoadState::Loading => format!(" [loading {}]", spinner(tick)),
        LoadState::Ready => String::new(),
        LoadState::Failed => " [stale]".to_string(),
    }
}

/// A centered rectangle of fixed size, clamped to the available area.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a create form as a centered overlay.
///
/// One line per field, the focused one marked and bolded. The hint line
/// reflects whether the form is submittable yet.
pub fn render_form_overlay(frame: &mut Frame, area: Rect, title: &str, form: &FormState) {
    let height = form.fields().len() as u16 + 4;
    let popup = centered_rect(area, 48, height);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::with_capacity(form.fields().len() + 2);
    for (i, field) in form.fields().iter().enumerate() {
        let focused = i == form.focus();
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<14}", marker, field.label), style),
            Span::styled(field.value.clone(), style),
        ]));
    }
    lines.push(Line::default());
    let hint = if form.is_complete() {
        "Enter save   Tab next field   Esc cancel"
    } else {
        "Fill all fields   Tab next field   Esc cancel"
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM))));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", title));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), '|');
        assert_eq!(spinner(1), '/');
        assert_eq!(spinner(4), '|');
    }

    #[test]
    fn test_state_tag() {
        assert_eq!(state_tag(LoadState::Ready, 0), "");
        assert_eq!(state_tag(LoadState::Loading, 0), " [loading |]");
        assert_eq!(state_tag(LoadState::Failed, 0), " [stale]");
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = centered_rect(area, 48, 20);
        assert_eq!(rect.width, 10);
        assert_eq!(rect.height, 5);

        let rect = centered_rect(Rect::new(0, 0, 100, 40), 48, 10);
        assert_eq!(rect.x, 26);
        assert_eq!(rect.y, 15);
    }
}
