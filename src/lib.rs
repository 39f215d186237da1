//! modelfetch fetches files over HTTP(S) and checks them against a content
//! hash, reusing local copies that are already correct.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use modelfetch::{FetchRequest, FetcherBuilder, Error};
//! use std::convert::TryFrom;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let url = "https://example.com/gpt-j-hf/config.json";
//! let request = FetchRequest::try_from(url)?
//!     .with_destination("models")
//!     .with_hash("a0af27bcff3c0fa17ec9718ffb6060b8db5e54e4");
//! let fetcher = FetcherBuilder::new().build();
//! let summary = fetcher.fetch(&request).await?;
//! println!("{} is {}", summary.path().display(), summary.outcome());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`request`] - The `FetchRequest` struct, destination resolution and fetch summaries
//! - [`integrity`] - Streaming digests and hash verification
//! - [`fetcher`] - The `Fetcher` and `FetcherBuilder`
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bars and fetch events
//! - [`utils`] - Shared utility functions

pub mod error;
pub mod fetcher;
pub mod http;
pub mod integrity;
pub mod progress;
pub mod request;
pub mod utils;

pub use error::{Error, Result};
pub use fetcher::{Fetcher, FetcherBuilder};
pub use http::{create_http_client, HttpClientConfig};
pub use integrity::{detect_hash_type, digest, verify, HashType, IntegrityChecker};
pub use progress::{FetchEvent, ProgressBarOpts, StyleOptions};
pub use request::{FetchRequest, Summary, TransferOutcome};
