//! Circulation page: loan table plus the issue pick lists.
//!
//! Overdue rows are derived display state; they render highlighted and
//! offer "Return & Pay" instead of "Return".

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{issue, App, IssueColumn, Mode};
use crate::models::DisplayStatus;
use crate::traits::HttpClient;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_OK, COLOR_SELECTION, COLOR_WARN,
};
use crate::ui::widgets::state_tag;

pub fn render<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    render_search_bar(frame, rows[0], app);

    if app.mode == Mode::Issue {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        render_loan_table(frame, cols[0], app);
        render_issue_panel(frame, cols[1], app);
    } else {
        render_loan_table(frame, rows[1], app);
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
        Span::styled(format!("{}{}", app.loans.search(), cursor), search_style),
        Span::styled(
            format!("   Status: {}", app.loans.filter()),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_loan_table<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
    let title = format!(
        " Loans ({}){} ",
        app.loans.visible_len(),
        state_tag(app.loans.state(), app.tick_count)
    );
    let selected = app.loans.selected();

    let rows: Vec<Row> = app
        .loans
        .visible()
        .into_iter()
        .map(|loan| {
            let status_color = match loan.display {
                DisplayStatus::Issued => COLOR_WARN,
                DisplayStatus::Returned => COLOR_OK,
                DisplayStatus::Overdue => COLOR_ERROR,
            };
            let fine = if loan.transaction.fine > 0.0 {
                format!("${:.2}", loan.transaction.fine)
            } else {
                "-".to_string()
            };
            Row::new(vec![
                Cell::from(loan.book_title.clone()),
                Cell::from(loan.member_name.clone()),
                Cell::from(loan.transaction.due_date.date().to_string()),
                Cell::from(Span::styled(
                    loan.display.label(),
                    Style::default().fg(status_color),
                )),
                Cell::from(fine),
                Cell::from(Span::styled(
                    loan.display.action_label().unwrap_or(""),
                    Style::default().fg(COLOR_DIM),
                )),
            ])
        })
        .collect();

    let header = Row::new(vec!["Book", "Member", "Due", "Status", "Fine", "Action"])
        .style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(28),
            Constraint::Percentage(22),
            Constraint::Percentage(13),
            Constraint::Percentage(13),
            Constraint::Percentage(10),
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

fn render_issue_panel<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let cols = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let books: Vec<ListItem> = issue::issuable(app.books.items())
        .into_iter()
        .map(|b| ListItem::new(format!("{} ({})", b.title, b.available_copies)))
        .collect();
    render_pick_list(
        frame,
        cols[0],
        "Book",
        books,
        app.issue.book_index,
        app.issue.column == IssueColumn::Books,
    );

    let members: Vec<ListItem> = app
        .members
        .items()
        .iter()
        .map(|m| ListItem::new(m.name.clone()))
        .collect();
    render_pick_list(
        frame,
        cols[1],
        "Member",
        members,
        app.issue.member_index,
        app.issue.column == IssueColumn::Members,
    );
}

fn render_pick_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    index: usize,
    focused: bool,
) {
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let empty = items.is_empty();
    let list = List::new(items)
        .highlight_style(Style::default().bg(COLOR_SELECTION))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", title)),
        );
    let mut state = ListState::default();
    state.select(if empty { None } else { Some(index) });
    frame.render_stateful_widget(list, area, &mut state);
}
