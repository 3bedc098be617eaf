//! Keyboard handling.
//!
//! One entry point, `handle_key`, dispatched by input mode. Browse mode
//! carries the navigation and action keys; Search, Form, and Issue modes
//! capture keystrokes for their own widget until Esc.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{issue, Mode, Page};
use crate::traits::HttpClient;

use super::App;

impl<C: HttpClient + 'static> App<C> {
    /// Dispatch a key event according to the current input mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from anywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Form => self.handle_form_key(key),
            Mode::Issue => self.handle_issue_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.goto(self.page.next()),
            KeyCode::Char('1') => self.goto(Page::Dashboard),
            KeyCode::Char('2') => self.goto(Page::Books),
            KeyCode::Char('3') => self.goto(Page::Members),
            KeyCode::Char('4') => self.goto(Page::Circulation),
            KeyCode::Char('r') => {
                self.notice = None;
                self.refresh_page();
            }
            KeyCode::Char('/') if self.page != Page::Dashboard => {
                self.mode = Mode::Search;
            }
            KeyCode::Char('f') if self.page != Page::Dashboard => self.cycle_filter(),
            KeyCode::Char('a') if self.page == Page::Books => {
                self.book_form.open();
                self.mode = Mode::Form;
            }
            KeyCode::Char('a') if self.page == Page::Members => {
                self.member_form.open();
                self.mode = Mode::Form;
            }
            KeyCode::Char('d') if self.page == Page::Books => self.delete_selected_book(),
            KeyCode::Char('d') if self.page == Page::Members => self.delete_selected_member(),
            KeyCode::Char('i') if self.page == Page::Circulation => {
                self.mode = Mode::Issue;
            }
            KeyCode::Enter if self.page == Page::Circulation => self.return_selected(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Backspace => match self.page {
                Page::Books => self.books.pop_search_char(),
                Page::Members => self.members.pop_search_char(),
                Page::Circulation => self.loans.pop_search_char(),
                Page::Dashboard => {}
            },
            KeyCode::Char(c) => match self.page {
                Page::Books => self.books.push_search_char(c),
                Page::Members => self.members.push_search_char(c),
                Page::Circulation => self.loans.push_search_char(c),
                Page::Dashboard => {}
            },
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = match self.page {
            Page::Books => &mut self.book_form,
            Page::Members => &mut self.member_form,
            _ => {
                self.mode = Mode::Browse;
                return;
            }
        };
        match key.code {
            KeyCode::Esc => {
                form.close();
                self.mode = Mode::Browse;
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.type_char(c),
            KeyCode::Enter => match self.page {
                Page::Books => self.submit_book_form(),
                Page::Members => self.submit_member_form(),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_issue_key(&mut self, key: KeyEvent) {
        let book_count = issue::issuable(self.books.items()).len();
        let member_count = self.members.items().len();
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => self.issue.toggle_column(),
            KeyCode::Down | KeyCode::Char('j') => self.issue.select_next(book_count, member_count),
            KeyCode::Up | KeyCode::Char('k') => self.issue.select_prev(),
            KeyCode::Enter => self.issue_selected(),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        match self.page {
            Page::Books => self.books.select_next(),
            Page::Members => self.members.select_next(),
            Page::Circulation => self.loans.select_next(),
            Page::Dashboard => {}
        }
    }

    fn select_prev(&mut self) {
        match self.page {
            Page::Books => self.books.select_prev(),
            Page::Members => self.members.select_prev(),
            Page::Circulation => self.loans.select_prev(),
            Page::Dashboard => {}
        }
    }

    /// Cycle the current page's filter through its known values.
    fn cycle_filter(&mut self) {
        match self.page {
            Page::Books => {
                let mut categories: Vec<String> = self
                    .books
                    .items()
                    .iter()
                    .map(|b| b.category.to_lowercase())
                    .collect();
                categories.sort();
                categories.dedup();
                let next = next_filter(self.books.filter(), &categories);
                self.books.set_filter(next);
            }
            Page::Circulation => {
                let statuses = [
                    "issued".to_string(),
                    "returned".to_string(),
                    "overdue".to_string(),
                ];
                let next = next_filter(self.loans.filter(), &statuses);
                self.loans.set_filter(next);
            }
            // Members have no filter dimension
            _ => {}
        }
    }
}

/// The value after `current` in `all -> values.. -> all` order.
fn next_filter(current: &str, values: &[String]) -> String {
    if values.is_empty() {
        return crate::store::FILTER_ALL.to_string();
    }
    match values.iter().position(|v| v == current) {
        None => values[0].clone(),
        Some(i) if i + 1 < values.len() => values[i + 1].clone(),
        Some(_) => crate::store::FILTER_ALL.to_string(),
    }
}
