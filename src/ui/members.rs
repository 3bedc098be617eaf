//! Members page: search bar, roster table, create-form overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{App, Mode};
use crate::traits::HttpClient;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SELECTION};
use crate::ui::widgets::{render_form_overlay, state_tag};

pub fn render<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    render_search_bar(frame, rows[0], app);
    render_table(frame, rows[1], app);

    if app.member_form.visible() {
        render_form_overlay(frame, area, "Register member", &app.member_form);
    }
}

fn render_search_bar<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let searching = app.mode == Mode::Search;
    let search_style = if searching {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let cursor = if searching { "_" } else { "" };
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(COLOR_DIM)),
        Span::styled(format!("{}{}", app.members.search(), cursor), search_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_table<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
    let title = format!(
        " Members ({}){} ",
        app.members.visible_len(),
        state_tag(app.members.state(), app.tick_count)
    );
    let selected = app.members.selected();

    let rows: Vec<Row> = app
        .members
        .visible()
        .into_iter()
        .map(|member| {
            Row::new(vec![
                Cell::from(member.name.clone()),
                Cell::from(member.email.clone()),
                Cell::from(member.phone.clone()),
                Cell::from(member.joined_date.to_string()),
                Cell::from(member.tier.clone()),
            ])
        })
        .collect();

    let header = Row::new(vec!["Name", "Email", "Phone", "Joined", "Tier"])
        .style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(26),
            Constraint::Percentage(30),
            Constraint::Percentage(16),
            Constraint::Percentage(14),
            Constraint::Percentage(14),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().bg(COLOR_SELECTION))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(title),
    );

    let mut state = TableState::default();
    state.select(selected);
    frame.render_stateful_widget(table, area, &mut state);
}
