//! Books page: search bar, catalog table, create-form overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{App, Mode};
use crate::traits::HttpClient;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_OK, COLOR_SELECTION, COLOR_WARN,
};
use crate::ui::widgets::{render_form_overlay, state_tag};

pub fn render<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    render_search_bar(frame, rows[0], app);
    render_table(frame, rows[1], app);

    if app.book_form.visible() {
        render_form_overlay(frame, area, "Add book", &app.book_form);
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
        Span::styled(format!("{}{}", app.books.search(), cursor), search_style),
        Span::styled(
            format!("   Filter: {}", app.books.filter()),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_table<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
    let title = format!(
        " Books ({}){} ",
        app.books.visible_len(),
        state_tag(app.books.state(), app.tick_count)
    );
    let selected = app.books.selected();

    let rows: Vec<Row> = app
        .books
        .visible()
        .into_iter()
        .map(|book| {
            let availability_color = if book.available_copies == 0 {
                COLOR_ERROR
            } else if book.available_copies < book.total_copies {
                COLOR_WARN
            } else {
                COLOR_OK
            };
            Row::new(vec![
                Cell::from(book.title.clone()),
                Cell::from(book.author.clone()),
                Cell::from(book.isbn.clone()),
                Cell::from(book.category.clone()),
                Cell::from(Span::styled(
                    format!("{}/{}", book.available_copies, book.total_copies),
                    Style::default().fg(availability_color),
                )),
            ])
        })
        .collect();

    let header = Row::new(vec!["Title", "Author", "ISBN", "Category", "Avail"])
        .style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(32),
            Constraint::Percentage(24),
            Constraint::Percentage(18),
            Constraint::Percentage(16),
            Constraint::Percentage(10),
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
