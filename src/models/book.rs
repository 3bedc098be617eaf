//! Book catalog models.
//!
//! Wire format follows the backend's snake_case schema. Some deployments
//! report copy counts in camelCase (`availableCopies`/`totalCopies`); those
//! are accepted on decode via serde aliases and normalized here, never
//! re-emitted.

use serde::{Deserialize, Serialize};

/// A catalogued book as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    #[serde(alias = "totalCopies")]
    pub total_copies: u32,
    #[serde(alias = "availableCopies")]
    pub available_copies: u32,
    /// Copies currently out on loan. Older backends omit this field.
    #[serde(default, alias = "issuedCopies")]
    pub issued_copies: u32,
}

impl Book {
    /// Whether at least one copy can be issued.
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// Check the `0 <= available <= total` invariant.
    ///
    /// The counts are server-derived; a violation means the backend sent
    /// inconsistent data and is worth logging, not panicking over.
    pub fn copies_consistent(&self) -> bool {
        self.available_copies <= self.total_copies
    }
}

/// Payload for creating a book via `POST /books/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub total_copies: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            id: "b1".to_string(),
            title: "The Rust Programming Language".to_string(),
            author: "Klabnik".to_string(),
            isbn: "978-1593278281".to_string(),
            category: "Programming".to_string(),
            total_copies: 3,
            available_copies: 2,
            issued_copies: 1,
        }
    }

    #[test]
    fn test_deserialize_snake_case() {
        let json = r#"{
            "id": "b1",
            "title": "Dune",
            "author": "Herbert",
            "isbn": "978-0441172719",
            "category": "SciFi",
            "total_copies": 4,
            "available_copies": 4,
            "issued_copies": 0
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.total_copies, 4);
        assert_eq!(book.available_copies, 4);
    }

    #[test]
    fn test_deserialize_camel_case_fallback() {
        // Alternate schema observed in the wild: copy counts in camelCase
        let json = r#"{
            "id": "b2",
            "title": "Dune",
            "author": "Herbert",
            "isbn": "978-0441172719",
            "category": "SciFi",
            "totalCopies": 5,
            "availableCopies": 3
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.total_copies, 5);
        assert_eq!(book.available_copies, 3);
        assert_eq!(book.issued_copies, 0);
    }

    #[test]
    fn test_serialize_is_snake_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("available_copies").is_some());
        assert!(json.get("availableCopies").is_none());
    }

    #[test]
    fn test_is_available() {
        let mut book = sample();
        assert!(book.is_available());
        book.available_copies = 0;
        assert!(!book.is_available());
    }

    #[test]
    fn test_copies_consistent() {
        let mut book = sample();
        assert!(book.copies_consistent());
        book.available_copies = 4;
        assert!(!book.copies_consistent());
    }

    #[test]
    fn test_new_book_payload() {
        let payload = NewBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "978-0441172719".to_string(),
            category: "SciFi".to_string(),
            total_copies: 2,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["total_copies"], 2);
        assert!(json.get("id").is_none());
    }
}
