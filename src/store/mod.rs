//! Data access façade over the hosted store.

pub mod client;

pub use client::{
    AuthSession, AuthUser, StoreClient, DEFAULT_STORE_URL, STORE_KEY_ENV, STORE_URL_ENV,
};
