//! The [`Fetcher`], its builder and its configuration.
//!
//! - `fetcher` - Core Fetcher struct with the fetch state machine
//! - `builder` - FetcherBuilder for configuring a Fetcher
//! - `config` - Configuration structure and defaults
//! - `phase` - The states of a single fetch
//!
//! # Examples
//!
//! ```rust,no_run
//! use modelfetch::{FetchRequest, FetcherBuilder};
//! use std::convert::TryFrom;
//!
//! # async fn example() -> modelfetch::Result<()> {
//! let fetcher = FetcherBuilder::new().build();
//! let requests = vec![
//!     FetchRequest::try_from("https://example.com/gpt-j-hf/config.json")?,
//!     FetchRequest::try_from("https://example.com/gpt-j-hf/pytorch_model.bin")?,
//! ];
//! let summaries = fetcher.fetch_all(&requests).await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;
pub(crate) mod phase;

pub use builder::FetcherBuilder;
pub use config::FetcherConfig;
pub use fetcher::Fetcher;
