//! API-calling actions spawned off the event loop.
//!
//! Every action clones the shared client and the message sender, runs the
//! round-trip on a spawned task, and reports back through [`AppMessage`].
//! The event loop stays responsive; stores pick the results up via
//! `handle_message`.

use chrono::Local;
use tracing::info;

use crate::app::{issue, AppMessage, LoanView, Notice, Page};
use crate::models::{NewBook, NewMember};
use crate::traits::HttpClient;

use super::App;

impl<C: HttpClient + 'static> App<C> {
    // ========================================================================
    // Loads
    // ========================================================================

    /// Reload every store. Called at startup and after any mutation.
    pub fn refresh_all(&mut self) {
        self.refresh_stats();
        self.refresh_circulation();
    }

    /// Reload what the current page shows.
    pub fn refresh_page(&mut self) {
        match self.page {
            Page::Dashboard => self.refresh_stats(),
            Page::Books => self.refresh_books(),
            Page::Members => self.refresh_members(),
            Page::Circulation => self.refresh_circulation(),
        }
    }

    /// Reload the book catalog.
    pub fn refresh_books(&mut self) {
        let token = self.books.begin_load();
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client
                .list_books(None)
                .await
                .map_err(|e| e.user_message());
            let _ = tx.send(AppMessage::BooksLoaded { token, result });
        });
    }

    /// Reload the member roster.
    pub fn refresh_members(&mut self) {
        let token = self.members.begin_load();
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client
                .list_members(None)
                .await
                .map_err(|e| e.user_message());
            let _ = tx.send(AppMessage::MembersLoaded { token, result });
        });
    }

    /// Reload the dashboard stats.
    pub fn refresh_stats(&mut self) {
        self.stats_state = crate::store::LoadState::Loading;
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client
                .dashboard_stats()
                .await
                .map_err(|e| e.user_message());
            let _ = tx.send(AppMessage::StatsLoaded(result));
        });
    }

    /// Reload circulation: transactions plus the book and member lists the
    /// join and the issue pick lists depend on, fetched concurrently.
    pub fn refresh_circulation(&mut self) {
        let loans_token = self.loans.begin_load();
        let books_token = self.books.begin_load();
        let members_token = self.members.begin_load();
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let (transactions, books, members) = tokio::join!(
                client.list_transactions(),
                client.list_books(None),
                client.list_members(None),
            );

            let books = books.map_err(|e| e.user_message());
            let members = members.map_err(|e| e.user_message());

            let loans = match (transactions, &books, &members) {
                (Ok(transactions), Ok(books), Ok(members)) => Ok(LoanView::join(
                    transactions,
                    books,
                    members,
                    Local::now().naive_local(),
                )),
                (Err(e), _, _) => Err(e.user_message()),
                (_, Err(e), _) | (_, _, Err(e)) => Err(e.clone()),
            };

            let _ = tx.send(AppMessage::BooksLoaded {
                token: books_token,
                result: books,
            });
            let _ = tx.send(AppMessage::MembersLoaded {
                token: members_token,
                result: members,
            });
            let _ = tx.send(AppMessage::LoansLoaded {
                token: loans_token,
                result: loans,
            });
        });
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Submit the book create form.
    pub fn submit_book_form(&mut self) {
        if !self.book_form.is_complete() {
            self.notice = Some(Notice::error("All fields are required."));
            return;
        }
        let total_copies: u32 = match self.book_form.value("total_copies").trim().parse() {
            Ok(n) if n > 0 => n,
            _ => {
                self.notice = Some(Notice::error("Total copies must be a positive number."));
                return;
            }
        };
        let book = NewBook {
            title: self.book_form.value("title").trim().to_string(),
            author: self.book_form.value("author").trim().to_string(),
            isbn: self.book_form.value("isbn").trim().to_string(),
            category: self.book_form.value("category").trim().to_string(),
            total_copies,
        };

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match client.create_book(&book).await {
                Ok(created) => {
                    info!(id = %created.id, title = %created.title, "book created");
                    Ok(format!("Added \"{}\"", created.title))
                }
                Err(e) => Err(e.user_message()),
            };
            let _ = tx.send(AppMessage::ActionFinished {
                result,
                reset_form: Some(Page::Books),
            });
        });
    }

    /// Submit the member create form.
    pub fn submit_member_form(&mut self) {
        if !self.member_form.is_complete() {
            self.notice = Some(Notice::error("All fields are required."));
            return;
        }
        let member = NewMember {
            name: self.member_form.value("name").trim().to_string(),
            email: self.member_form.value("email").trim().to_string(),
            phone: self.member_form.value("phone").trim().to_string(),
        };

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match client.create_member(&member).await {
                Ok(created) => {
                    info!(id = %created.id, "member registered");
                    Ok(format!("Registered {}", created.name))
                }
                Err(e) => Err(e.user_message()),
            };
            let _ = tx.send(AppMessage::ActionFinished {
                result,
                reset_form: Some(Page::Members),
            });
        });
    }

    /// Delete the book under the cursor.
    ///
    /// The backend does not reject deletion while copies are out on loan;
    /// loan history keeps rendering with a placeholder title.
    pub fn delete_selected_book(&mut self) {
        let Some(book) = self.books.selected_item() else {
            return;
        };
        let id = book.id.clone();
        let title = book.title.clone();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match client.delete_book(&id).await {
                Ok(()) => Ok(format!("Deleted \"{}\"", title)),
                Err(e) => Err(e.user_message()),
            };
            let _ = tx.send(AppMessage::ActionFinished {
                result,
                reset_form: None,
            });
        });
    }

    /// Delete the member under the cursor.
    pub fn delete_selected_member(&mut self) {
        let Some(member) = self.members.selected_item() else {
            return;
        };
        let id = member.id.clone();
        let name = member.name.clone();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match client.delete_member(&id).await {
                Ok(()) => Ok(format!("Removed {}", name)),
                Err(e) => Err(e.user_message()),
            };
            let _ = tx.send(AppMessage::ActionFinished {
                result,
                reset_form: None,
            });
        });
    }

    /// Issue the book and member under the pick-list cursors.
    pub fn issue_selected(&mut self) {
        let books = issue::issuable(self.books.items());
        let members: Vec<&crate::models::Member> = self.members.items().iter().collect();
        let Some(request) = self.issue.request(&books, &members) else {
            self.notice = Some(Notice::error("Select a book and a member to issue."));
            return;
        };

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match client.issue_book(&request).await {
                Ok(transaction) => {
                    info!(id = %transaction.id, "book issued");
                    Ok(format!("Issued, due {}", transaction.due_date.date()))
                }
                Err(e) => Err(e.user_message()),
            };
            let _ = tx.send(AppMessage::ActionFinished {
                result,
                reset_form: None,
            });
        });
    }

    /// Return the loan under the cursor. No-op on already-returned rows.
    pub fn return_selected(&mut self) {
        let Some(loan) = self.loans.selected_item() else {
            return;
        };
        if !loan.transaction.is_returnable() {
            return;
        }
        let id = loan.transaction.id.clone();
        let title = loan.book_title.clone();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match client.return_book(&id).await {
                Ok(transaction) => {
                    info!(id = %transaction.id, fine = transaction.fine, "book returned");
                    if transaction.fine > 0.0 {
                        Ok(format!(
                            "Returned \"{}\", fine ${:.2}",
                            title, transaction.fine
                        ))
                    } else {
                        Ok(format!("Returned \"{}\"", title))
                    }
                }
                Err(e) => Err(e.user_message()),
            };
            let _ = tx.send(AppMessage::ActionFinished {
                result,
                reset_form: None,
            });
        });
    }
}
