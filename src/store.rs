//! Generic list store: fetched collection plus derived filtered view.
//!
//! Every page follows the same cycle — load on entry, derive a searched and
//! filtered view, mutate via the API, reload. [`ListStore`] implements that
//! cycle once, parameterized by the entity's searchable field set.
//!
//! Loads carry a monotonically increasing request token. A completion whose
//! token is stale (a newer load began since) is discarded, so rapid search
//! edits can never render an out-of-order response.

use tracing::{debug, warn};

/// Searchable/filterable behavior for entities held in a [`ListStore`].
///
/// `needle` and `filter` arrive lowercased; implementations compare their
/// own fields case-insensitively against them.
pub trait Searchable {
    /// Case-insensitive substring match over the entity's field set.
    fn matches_search(&self, needle: &str) -> bool;

    /// Exact field equality; the `"all"` sentinel is handled by the store
    /// and never reaches this method.
    fn matches_filter(&self, _filter: &str) -> bool {
        true
    }
}

/// Load state machine: `Idle -> Loading -> Ready`, or `Loading -> Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load attempted yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Last load succeeded
    Ready,
    /// Last load failed; prior data is retained
    Failed,
}

/// Sentinel filter value meaning "no filter".
pub const FILTER_ALL: &str = "all";

/// Holds the full fetched collection and a lazily recomputed derived view.
#[derive(Debug)]
pub struct ListStore<T: Searchable> {
    items: Vec<T>,
    state: LoadState,
    error: Option<String>,
    search: String,
    filter: String,
    /// Cached derived view as indices into `items`
    visible: Vec<usize>,
    visible_dirty: bool,
    /// Token of the most recently started load
    seq: u64,
    /// Selected row within the derived view
    selected: usize,
}

impl<T: Searchable> Default for ListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Searchable> ListStore<T> {
    /// Create an empty store in the Idle state.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            state: LoadState::Idle,
            error: None,
            search: String::new(),
            filter: FILTER_ALL.to_string(),
            visible: Vec::new(),
            visible_dirty: true,
            seq: 0,
            selected: 0,
        }
    }

    // ========================================================================
    // Load lifecycle
    // ========================================================================

    /// Start a load: transition to Loading and hand out a request token.
    pub fn begin_load(&mut self) -> u64 {
        self.seq += 1;
        self.state = LoadState::Loading;
        self.seq
    }

    /// Complete a load started with [`begin_load`](Self::begin_load).
    ///
    /// Returns false when the token is stale, in which case the result is
    /// discarded entirely. On failure the previous collection stays in place.
    pub fn finish_load(&mut self, token: u64, result: Result<Vec<T>, String>) -> bool {
        if token != self.seq {
            debug!(token, current = self.seq, "discarding stale load response");
            return false;
        }

        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.state = LoadState::Ready;
            }
            Err(message) => {
                warn!(%message, "list load failed; keeping previous data");
                self.error = Some(message);
                self.state = LoadState::Failed;
            }
        }
        self.visible_dirty = true;
        true
    }

    /// Current load state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Error message from the last failed load, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ========================================================================
    // Derived view
    // ========================================================================

    /// Update the free-text search string.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.visible_dirty = true;
        }
    }

    /// Current search string.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Append a character to the search string.
    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.visible_dirty = true;
    }

    /// Remove the last character from the search string.
    pub fn pop_search_char(&mut self) {
        if self.search.pop().is_some() {
            self.visible_dirty = true;
        }
    }

    /// Update the filter selection; `"all"` disables filtering.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter != self.filter {
            self.filter = filter;
            self.visible_dirty = true;
        }
    }

    /// Current filter selection.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The derived view, recomputed if inputs changed since the last call.
    ///
    /// Recomputation never mutates the stored collection.
    pub fn visible(&mut self) -> Vec<&T> {
        self.recompute_if_dirty();
        self.visible.iter().map(|&i| &self.items[i]).collect()
    }

    /// Number of rows in the derived view.
    pub fn visible_len(&mut self) -> usize {
        self.recompute_if_dirty();
        self.visible.len()
    }

    /// The full stored collection, unfiltered.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn recompute_if_dirty(&mut self) {
        if !self.visible_dirty {
            return;
        }
        let needle = self.search.trim().to_lowercase();
        let filter = self.filter.trim().to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| needle.is_empty() || item.matches_search(&needle))
            .filter(|(_, item)| filter == FILTER_ALL || item.matches_filter(&filter))
            .map(|(i, _)| i)
            .collect();
        self.visible_dirty = false;
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Index of the selected row within the derived view.
    pub fn selected(&mut self) -> Option<usize> {
        self.recompute_if_dirty();
        if self.visible.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    /// The selected entity, if any row is visible.
    pub fn selected_item(&mut self) -> Option<&T> {
        self.recompute_if_dirty();
        self.visible.get(self.selected).map(|&i| &self.items[i])
    }

    /// Move selection down one row, clamped to the last row.
    pub fn select_next(&mut self) {
        self.recompute_if_dirty();
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    /// Move selection up one row, clamped to the first row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

// ============================================================================
// Entity field sets
// ============================================================================

impl Searchable for crate::models::Book {
    /// Books match on title, author, or ISBN.
    fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.isbn.to_lowercase().contains(needle)
    }

    /// Books filter by exact category.
    fn matches_filter(&self, filter: &str) -> bool {
        self.category.to_lowercase() == filter
    }
}

impl Searchable for crate::models::Member {
    /// Members match on name, email, or id.
    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }
}
