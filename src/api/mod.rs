//! Library backend API client.
//!
//! One method per REST operation against the configured base URL. Every call
//! is a single HTTP round-trip returning the decoded body; non-2xx responses
//! become [`ApiError`]s carrying the server's message when present.

mod error;

pub use error::ApiError;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::adapters::ReqwestHttpClient;
use crate::models::{
    Book, DashboardStats, IssueRequest, Member, NewBook, NewMember, Transaction,
};
use crate::traits::{Headers, HttpClient, Response};

/// Client for the library management backend.
///
/// Generic over the transport so tests can substitute a mock; production
/// code uses the reqwest adapter via [`LibraryClient::new`].
#[derive(Debug, Clone)]
pub struct LibraryClient<C: HttpClient = ReqwestHttpClient> {
    base_url: String,
    http: C,
}

impl LibraryClient<ReqwestHttpClient> {
    /// Create a client against the given base URL using the reqwest adapter.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, ReqwestHttpClient::new())
    }
}

impl<C: HttpClient> LibraryClient<C> {
    /// Create a client with a custom transport.
    pub fn with_http(base_url: impl Into<String>, http: C) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Books
    // ========================================================================

    /// `GET /books?search=<q>` — list books, optionally server-filtered.
    pub async fn list_books(&self, search: Option<&str>) -> Result<Vec<Book>, ApiError> {
        self.get_json(&listing_path("/books", search)).await
    }

    /// `POST /books/` — create a book. Fails with [`ApiError::Validation`]
    /// on missing fields or an ISBN conflict.
    pub async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        self.post_json("/books/", book).await
    }

    /// `DELETE /books/{id}` — fails with [`ApiError::NotFound`] for an
    /// unknown id. The backend does not check for active loans.
    pub async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/books/{}", id)).await
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// `GET /members?search=<q>` — list members, optionally server-filtered.
    pub async fn list_members(&self, search: Option<&str>) -> Result<Vec<Member>, ApiError> {
        self.get_json(&listing_path("/members", search)).await
    }

    /// `POST /members/` — create a member. Fails with
    /// [`ApiError::Validation`] on a duplicate email.
    pub async fn create_member(&self, member: &NewMember) -> Result<Member, ApiError> {
        self.post_json("/members/", member).await
    }

    /// `DELETE /members/{id}`.
    pub async fn delete_member(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/members/{}", id)).await
    }

    // ========================================================================
    // Circulation
    // ========================================================================

    /// `GET /transactions/` — full loan history.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("/transactions/").await
    }

    /// `POST /transactions/issue` — issue a book to a member.
    ///
    /// The server decrements the book's availability. Fails with
    /// [`ApiError::BusinessRule`] when no copy is available.
    pub async fn issue_book(&self, request: &IssueRequest) -> Result<Transaction, ApiError> {
        self.post_json("/transactions/issue", request)
            .await
            .map_err(ApiError::into_business_rule)
    }

    /// `POST /transactions/return/{id}` — return a loan.
    ///
    /// The server sets the return date, computes the fine, and increments
    /// availability. Fails with [`ApiError::NotFound`] for an unknown id and
    /// [`ApiError::BusinessRule`] when the loan was already returned.
    pub async fn return_book(&self, transaction_id: &str) -> Result<Transaction, ApiError> {
        let path = format!("/transactions/return/{}", transaction_id);
        let response = self
            .http
            .post(&self.url(&path), "", &json_headers())
            .await?;
        decode(response).map_err(ApiError::into_business_rule)
    }

    // ========================================================================
    // Dashboard
    // ========================================================================

    /// `GET /dashboard/stats` — aggregate counts.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/dashboard/stats").await
    }

    // ========================================================================
    // Transport helpers
    // ========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.http.get(&url, &Headers::new()).await?;
        decode(response)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let payload = serde_json::to_string(body)?;
        let response = self.http.post(&url, &payload, &json_headers()).await?;
        decode(response)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!(%url, "DELETE");
        let response = self.http.delete(&url, &Headers::new()).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_response(response.status, &response.body))
        }
    }
}

/// Build a listing path, percent-encoding the search term.
///
/// An empty or absent term omits the query entirely.
fn listing_path(base: &str, search: Option<&str>) -> String {
    match search {
        Some(q) if !q.trim().is_empty() => {
            format!("{}?search={}", base, urlencoding::encode(q.trim()))
        }
        _ => base.to_string(),
    }
}

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.is_success() {
        Ok(response.json()?)
    } else {
        Err(ApiError::from_response(response.status, &response.body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;

    fn client(mock: MockHttpClient) -> LibraryClient<MockHttpClient> {
        LibraryClient::with_http("http://api", mock)
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let c = LibraryClient::with_http("http://api/", MockHttpClient::new());
        assert_eq!(c.base_url(), "http://api");
    }

    #[test]
    fn test_listing_path_without_search() {
        assert_eq!(listing_path("/books", None), "/books");
        assert_eq!(listing_path("/books", Some("")), "/books");
        assert_eq!(listing_path("/books", Some("   ")), "/books");
    }

    #[test]
    fn test_listing_path_encodes_search() {
        assert_eq!(
            listing_path("/books", Some("the rust book")),
            "/books?search=the%20rust%20book"
        );
    }

    #[tokio::test]
    async fn test_list_books_decodes_collection() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "http://api/books",
            200,
            r#"[{"id":"b1","title":"Dune","author":"Herbert","isbn":"1","category":"SciFi",
                "total_copies":2,"available_copies":2,"issued_copies":0}]"#,
        );

        let books = client(mock).list_books(None).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
    }

    #[tokio::test]
    async fn test_list_books_passes_search_term() {
        let mock = MockHttpClient::new();
        mock.set_json_response("http://api/books", 200, "[]");

        client(mock.clone()).list_books(Some("dune")).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].url, "http://api/books?search=dune");
    }

    #[tokio::test]
    async fn test_issue_maps_400_to_business_rule() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "http://api/transactions/issue",
            400,
            r#"{"detail": "Book is not available"}"#,
        );

        let request = IssueRequest {
            book_id: "b1".to_string(),
            member_id: "m1".to_string(),
        };
        let err = client(mock).issue_book(&request).await.unwrap_err();
        assert!(matches!(err, ApiError::BusinessRule { .. }));
        assert_eq!(err.to_string(), "Book is not available");
    }

    #[tokio::test]
    async fn test_delete_unknown_book_is_not_found() {
        let mock = MockHttpClient::new();
        mock.set_json_response("http://api/books/ghost", 404, r#"{"detail": "Book not found"}"#);

        let err = client(mock).delete_book("ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://api/dashboard/stats",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let err = client(mock).dashboard_stats().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_create_book_sends_json_body() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "http://api/books/",
            200,
            r#"{"id":"b9","title":"Dune","author":"Herbert","isbn":"1","category":"SciFi",
                "total_copies":2,"available_copies":2,"issued_copies":0}"#,
        );

        let new_book = NewBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "1".to_string(),
            category: "SciFi".to_string(),
            total_copies: 2,
        };
        let created = client(mock.clone()).create_book(&new_book).await.unwrap();
        assert_eq!(created.id, "b9");

        let requests = mock.requests();
        assert_eq!(requests[0].method, "POST");
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["isbn"], "1");
    }
}
