//! HTTP client construction.
//!
//! - [`client`] - HTTP client creation and middleware configuration
//!
//! Response header helpers live in [`crate::utils`].

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
