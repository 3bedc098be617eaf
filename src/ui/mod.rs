//! UI rendering.
//!
//! Layout: tab bar on top, the active page in the middle, a footer with
//! the notice line and keybind hints.

mod books;
mod circulation;
mod dashboard;
mod members;
pub mod theme;
pub mod widgets;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Mode, Page};
use crate::traits::HttpClient;
use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_OK};

/// Render the whole interface.
pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &mut App<C>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, rows[0], app.page);

    match app.page {
        Page::Dashboard => {
            dashboard::render(frame, rows[1], &app.stats, app.stats_state, app.tick_count)
        }
        Page::Books => books::render(frame, rows[1], app),
        Page::Members => members::render(frame, rows[1], app),
        Page::Circulation => circulation::render(frame, rows[1], app),
    }

    render_notice(frame, rows[2], app);
    render_hints(frame, rows[3], app);
}

fn render_tabs(frame: &mut Frame, area: Rect, page: Page) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| Line::from(format!(" {} {} ", i + 1, p.title())))
        .collect();
    let index = Page::ALL.iter().position(|p| *p == page).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(index)
        .style(Style::default().fg(COLOR_DIM))
        .highlight_style(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_notice<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let Some(notice) = &app.notice else {
        return;
    };
    let color = if notice.is_error { COLOR_ERROR } else { COLOR_OK };
    let line = Line::from(Span::styled(
        notice.text.clone(),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hints<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let hints = match app.mode {
        Mode::Search => "type to search   Enter/Esc done",
        Mode::Form => "type to edit   Tab next   Enter save   Esc cancel",
        Mode::Issue => "j/k move   Tab switch list   Enter issue   Esc back",
        Mode::Browse => match app.page {
            Page::Dashboard => "Tab/1-4 pages   r refresh   q quit",
            Page::Books => {
                "j/k move   / search   f filter   a add   d delete   r refresh   q quit"
            }
            Page::Members => "j/k move   / search   a add   d delete   r refresh   q quit",
            Page::Circulation => {
                "j/k move   Enter return   i issue   / search   f filter   r refresh   q quit"
            }
        },
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(COLOR_DIM)))),
        area,
    );
}
