//! API error taxonomy.
//!
//! Non-2xx responses are classified by status code, carrying the
//! server-provided message when one is present. The backend wraps messages
//! as `{"detail": "..."}`; plain-text bodies are passed through as-is.

use thiserror::Error;

use crate::traits::HttpError;

/// Errors surfaced by [`LibraryClient`](super::LibraryClient) operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection refused, timeout, DNS, etc.
    #[error("network error: {0}")]
    Network(#[from] HttpError),

    /// The server rejected the request data (4xx with message).
    #[error("{message}")]
    Validation { message: String },

    /// A domain rule blocked the operation, e.g. issuing a book with zero
    /// available copies or returning an already-returned loan.
    #[error("{message}")]
    BusinessRule { message: String },

    /// The referenced entity does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// The server failed (5xx or unclassified status).
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = extract_detail(body)
            .unwrap_or_else(|| format!("request failed with status {}", status));

        match status {
            404 => ApiError::NotFound { message },
            400 | 409 | 422 => ApiError::Validation { message },
            _ => ApiError::Server { status, message },
        }
    }

    /// Reinterpret a validation rejection as a business-rule failure.
    ///
    /// The backend answers 400 both for malformed payloads and for rule
    /// violations; operations that can only fail on rules (issue, return)
    /// use this to pick the right variant.
    pub fn into_business_rule(self) -> Self {
        match self {
            ApiError::Validation { message } => ApiError::BusinessRule { message },
            other => other,
        }
    }

    /// Whether this error means the target entity is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Message suitable for the notice line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Validation { message }
            | ApiError::BusinessRule { message }
            | ApiError::NotFound { message } => message.clone(),
            ApiError::Server { .. } => {
                "The server is experiencing issues. Please try again later.".to_string()
            }
            ApiError::Decode(_) => "Received an invalid response from the server.".to_string(),
        }
    }
}

/// Pull the `detail` field out of a FastAPI-style error body.
fn extract_detail(body: &[u8]) -> Option<String> {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return Some(detail.to_string());
        }
    }
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_maps_to_not_found() {
        let err = ApiError::from_response(404, br#"{"detail": "Book not found"}"#);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Book not found");
    }

    #[test]
    fn test_400_maps_to_validation() {
        let err = ApiError::from_response(400, br#"{"detail": "Book with this ISBN already exists"}"#);
        assert!(matches!(err, ApiError::Validation { .. }));
        assert_eq!(err.to_string(), "Book with this ISBN already exists");
    }

    #[test]
    fn test_500_maps_to_server() {
        let err = ApiError::from_response(500, b"boom");
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
    }

    #[test]
    fn test_plain_text_body() {
        let err = ApiError::from_response(422, b"unprocessable");
        assert_eq!(err.to_string(), "unprocessable");
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let err = ApiError::from_response(400, b"");
        assert_eq!(err.to_string(), "request failed with status 400");
    }

    #[test]
    fn test_into_business_rule_remaps_validation_only() {
        let err = ApiError::from_response(400, br#"{"detail": "Book is not available"}"#)
            .into_business_rule();
        assert!(matches!(err, ApiError::BusinessRule { .. }));

        let err = ApiError::from_response(404, br#"{"detail": "Transaction not found"}"#)
            .into_business_rule();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_user_message_passes_server_detail_through() {
        let err = ApiError::from_response(400, br#"{"detail": "Book is not available"}"#);
        assert_eq!(err.user_message(), "Book is not available");
    }

    #[test]
    fn test_network_user_message() {
        let err: ApiError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert!(err.user_message().contains("Unable to reach"));
    }
}
