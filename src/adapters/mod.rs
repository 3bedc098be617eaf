//! Adapter implementations of the trait abstractions.
//!
//! Production code uses [`ReqwestHttpClient`]; tests can swap in
//! [`mock::MockHttpClient`] without touching the call sites.

pub mod mock;
pub mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
