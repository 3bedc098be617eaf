//! Main application state and message pump.
//!
//! [`App`] owns one list store per page, the create forms, and the channel
//! that spawned API calls report back on. Key handling lives in
//! [`handlers`], API-calling actions in [`actions`].

pub mod actions;
pub mod handlers;
pub mod issue;
pub mod loans;
pub mod messages;

pub use issue::{IssueColumn, IssueSelection};
pub use loans::LoanView;
pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::api::LibraryClient;
use crate::models::{Book, DashboardStats, Member};
use crate::store::{ListStore, LoadState};
use crate::traits::HttpClient;

/// Top-level pages, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Books,
    Members,
    Circulation,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Dashboard,
        Page::Books,
        Page::Members,
        Page::Circulation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Books => "Books",
            Page::Members => "Members",
            Page::Circulation => "Circulation",
        }
    }

    pub fn next(&self) -> Page {
        match self {
            Page::Dashboard => Page::Books,
            Page::Books => Page::Members,
            Page::Members => Page::Circulation,
            Page::Circulation => Page::Dashboard,
        }
    }
}

/// Input mode for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Table navigation and action keys
    #[default]
    Browse,
    /// Keystrokes edit the search string
    Search,
    /// Keystrokes edit the open create form
    Form,
    /// Keystrokes drive the issue pick lists
    Issue,
}

/// One-line status message shown in the footer.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state.
pub struct App<C: HttpClient = ReqwestHttpClient> {
    /// API client shared with spawned tasks
    pub client: Arc<LibraryClient<C>>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current page being displayed
    pub page: Page,
    /// Input mode on the current page
    pub mode: Mode,
    /// Book catalog store
    pub books: ListStore<Book>,
    /// Member roster store
    pub members: ListStore<Member>,
    /// Circulation store of joined loan rows
    pub loans: ListStore<LoanView>,
    /// Latest dashboard stats
    pub stats: DashboardStats,
    /// Dashboard load state
    pub stats_state: LoadState,
    /// Book create form
    pub book_form: crate::forms::FormState,
    /// Member create form
    pub member_form: crate::forms::FormState,
    /// Issue panel cursors
    pub issue: IssueSelection,
    /// Footer status line
    pub notice: Option<Notice>,
    /// Receiver for async messages (taken by the run loop for select!)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
}

impl<C: HttpClient + 'static> App<C> {
    /// Create the app around an API client. No data is loaded yet; call
    /// [`actions`]' `refresh_all` once the terminal is up.
    pub fn new(client: LibraryClient<C>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            should_quit: false,
            page: Page::Dashboard,
            mode: Mode::Browse,
            books: ListStore::new(),
            members: ListStore::new(),
            loans: ListStore::new(),
            stats: DashboardStats::default(),
            stats_state: LoadState::Idle,
            book_form: crate::forms::FormState::book(),
            member_form: crate::forms::FormState::member(),
            issue: IssueSelection::default(),
            notice: None,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
        }
    }

    /// Advance animation state.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Switch to a page, leaving any transient input mode behind.
    pub fn goto(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            self.mode = Mode::Browse;
            self.refresh_page();
        }
    }

    /// Apply a message from a spawned task to the stores.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::BooksLoaded { token, result } => {
                self.books.finish_load(token, result);
                if let Some(error) = self.books.error() {
                    self.notice = Some(Notice::error(error.to_string()));
                }
            }
            AppMessage::MembersLoaded { token, result } => {
                self.members.finish_load(token, result);
                if let Some(error) = self.members.error() {
                    self.notice = Some(Notice::error(error.to_string()));
                }
            }
            AppMessage::LoansLoaded { token, result } => {
                if self.loans.finish_load(token, result) {
                    let book_count = issue::issuable(self.books.items()).len();
                    let member_count = self.members.items().len();
                    self.issue.clamp(book_count, member_count);
                }
                if let Some(error) = self.loans.error() {
                    self.notice = Some(Notice::error(error.to_string()));
                }
            }
            AppMessage::StatsLoaded(result) => match result {
                Ok(stats) => {
                    self.stats = stats;
                    self.stats_state = LoadState::Ready;
                }
                Err(error) => {
                    // Previous stats stay on screen
                    self.stats_state = LoadState::Failed;
                    self.notice = Some(Notice::error(error));
                }
            },
            AppMessage::ActionFinished { result, reset_form } => match result {
                Ok(text) => {
                    match reset_form {
                        Some(Page::Books) => {
                            self.book_form.reset();
                            self.book_form.close();
                        }
                        Some(Page::Members) => {
                            self.member_form.reset();
                            self.member_form.close();
                        }
                        _ => {}
                    }
                    if self.mode == Mode::Form {
                        self.mode = Mode::Browse;
                    }
                    self.notice = Some(Notice::info(text));
                    self.refresh_all();
                }
                Err(text) => {
                    // Failed submissions keep their form values
                    self.notice = Some(Notice::error(text));
                }
            },
        }
    }

    /// The store backing the current page's table, if it has one.
    pub fn current_store_search(&self) -> Option<&str> {
        match self.page {
            Page::Dashboard => None,
            Page::Books => Some(self.books.search()),
            Page::Members => Some(self.members.search()),
            Page::Circulation => Some(self.loans.search()),
        }
    }
}
