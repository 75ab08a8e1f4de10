//! Adapter implementations of the trait abstractions.
//!
//! Production adapters live here alongside the mock implementations used by
//! unit and integration tests.

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockResponse, RecordedRequest};
pub use reqwest_http::ReqwestHttpClient;
