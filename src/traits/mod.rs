//! Trait abstractions for dependency injection.
//!
//! These traits define the seams between the application and its external
//! collaborators, allowing production implementations (in `crate::adapters`)
//! to be swapped for mocks in tests.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
