//! Trait abstractions for external dependencies.
//!
//! These traits decouple the application from concrete implementations,
//! enabling dependency injection and mocking in tests.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
