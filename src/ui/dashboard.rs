//! Dashboard page: four stat cards.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::DashboardStats;
use crate::store::LoadState;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_OK, COLOR_WARN};
use crate::ui::widgets::state_tag;

/// Render the four aggregate counts as a row of cards.
pub fn render(frame: &mut Frame, area: Rect, stats: &DashboardStats, state: LoadState, tick: u64) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("Library overview", Style::default().fg(COLOR_ACCENT)),
        Span::styled(state_tag(state, tick), Style::default().fg(COLOR_DIM)),
    ]));
    frame.render_widget(header, rows[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[1]);

    render_card(frame, cards[0], "Total Books", stats.total_books, COLOR_ACCENT);
    render_card(frame, cards[1], "Members", stats.total_members, COLOR_OK);
    render_card(frame, cards[2], "Books Issued", stats.books_issued, COLOR_WARN);
    let overdue_color = if stats.overdue_books > 0 {
        COLOR_ERROR
    } else {
        COLOR_DIM
    };
    render_card(frame, cards[3], "Overdue", stats.overdue_books, overdue_color);
}

fn render_card(frame: &mut Frame, area: Rect, label: &str, value: u32, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(label, Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
