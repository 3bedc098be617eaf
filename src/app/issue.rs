//! Issue-panel selection state.
//!
//! Issuing needs a book and a member. The panel shows two side-by-side
//! pick lists; this tracks which column has focus and the cursor within
//! each. Only books with at least one available copy are offered.

use crate::models::{Book, IssueRequest, Member};

/// Which pick list currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueColumn {
    #[default]
    Books,
    Members,
}

/// Cursor state for the two issue pick lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueSelection {
    pub column: IssueColumn,
    pub book_index: usize,
    pub member_index: usize,
}

impl IssueSelection {
    /// Switch focus to the other column.
    pub fn toggle_column(&mut self) {
        self.column = match self.column {
            IssueColumn::Books => IssueColumn::Members,
            IssueColumn::Members => IssueColumn::Books,
        };
    }

    /// Move the focused cursor down, clamped to the list length.
    pub fn select_next(&mut self, book_count: usize, member_count: usize) {
        match self.column {
            IssueColumn::Books => {
                if self.book_index + 1 < book_count {
                    self.book_index += 1;
                }
            }
            IssueColumn::Members => {
                if self.member_index + 1 < member_count {
                    self.member_index += 1;
                }
            }
        }
    }

    /// Move the focused cursor up.
    pub fn select_prev(&mut self) {
        match self.column {
            IssueColumn::Books => self.book_index = self.book_index.saturating_sub(1),
            IssueColumn::Members => self.member_index = self.member_index.saturating_sub(1),
        }
    }

    /// Clamp both cursors after the underlying lists changed.
    pub fn clamp(&mut self, book_count: usize, member_count: usize) {
        if self.book_index >= book_count {
            self.book_index = book_count.saturating_sub(1);
        }
        if self.member_index >= member_count {
            self.member_index = member_count.saturating_sub(1);
        }
    }

    /// Build the issue request from the current cursors, if both lists
    /// have a row under them.
    pub fn request(&self, books: &[&Book], members: &[&Member]) -> Option<IssueRequest> {
        let book = books.get(self.book_index)?;
        let member = members.get(self.member_index)?;
        Some(IssueRequest {
            book_id: book.id.clone(),
            member_id: member.id.clone(),
        })
    }
}

/// Books eligible for issue: at least one copy on the shelf.
pub fn issuable<'a>(books: &'a [Book]) -> Vec<&'a Book> {
    books.iter().filter(|b| b.is_available()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn book(id: &str, available: u32) -> Book {
        Book {
            id: id.to_string(),
            title: id.to_string(),
            author: "a".to_string(),
            isbn: "i".to_string(),
            category: "c".to_string(),
            total_copies: 3,
            available_copies: available,
            issued_copies: 3 - available,
        }
    }

    fn member(id: &str) -> Member {
        Member {
            id: id.to_string(),
            name: id.to_string(),
            email: "e@x".to_string(),
            phone: "p".to_string(),
            joined_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            tier: "standard".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_issuable_excludes_unavailable() {
        let books = vec![book("b1", 2), book("b2", 0), book("b3", 1)];
        let eligible = issuable(&books);
        assert_eq!(eligible.len(), 2);
        assert!(eligible.iter().all(|b| b.available_copies > 0));
    }

    #[test]
    fn test_navigation_clamped_per_column() {
        let mut sel = IssueSelection::default();
        sel.select_next(2, 1);
        assert_eq!(sel.book_index, 1);
        sel.select_next(2, 1);
        assert_eq!(sel.book_index, 1);

        sel.toggle_column();
        assert_eq!(sel.column, IssueColumn::Members);
        sel.select_next(2, 1);
        assert_eq!(sel.member_index, 0);
        sel.select_prev();
        assert_eq!(sel.member_index, 0);
    }

    #[test]
    fn test_request_needs_both_rows() {
        let sel = IssueSelection::default();
        let books = vec![book("b1", 1)];
        let book_refs: Vec<&Book> = books.iter().collect();
        assert!(sel.request(&book_refs, &[]).is_none());

        let members = vec![member("m1")];
        let member_refs: Vec<&Member> = members.iter().collect();
        let request = sel.request(&book_refs, &member_refs).unwrap();
        assert_eq!(request.book_id, "b1");
        assert_eq!(request.member_id, "m1");
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        let mut sel = IssueSelection {
            column: IssueColumn::Books,
            book_index: 5,
            member_index: 3,
        };
        sel.clamp(2, 0);
        assert_eq!(sel.book_index, 1);
        assert_eq!(sel.member_index, 0);
    }
}
