//! OneLine TUI - a terminal client for the OneLine micro-posting platform.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod composer;
pub mod error;
pub mod feed;
pub mod models;
pub mod session;
pub mod store;
pub mod traits;
pub mod ui;
