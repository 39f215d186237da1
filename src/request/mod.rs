//! Fetch requests and their results.
//!
//! - [`request`] - The [`FetchRequest`] struct and destination path resolution
//! - [`summary`] - The [`Summary`] of a successful fetch and the [`TransferOutcome`]
//!
//! # Examples
//!
//! ```rust
//! use modelfetch::request::FetchRequest;
//! use std::path::Path;
//!
//! # fn example() -> modelfetch::Result<()> {
//! let request = FetchRequest::try_from("https://host/gpt-j-hf/config.json")?;
//! assert_eq!(request.resolve()?, Path::new("gpt-j-hf/config.json"));
//! # Ok(())
//! # }
//! ```

pub mod request;
pub mod summary;

pub use request::FetchRequest;
pub use summary::{Summary, TransferOutcome};
