//! Libris - a terminal client for a library management backend
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod forms;
pub mod models;
pub mod store;
pub mod terminal;
pub mod traits;
pub mod ui;
