//! Content integrity checks for local files.
//!
//! Digests are computed by streaming the file through the hash in fixed-size
//! chunks, so memory use stays bounded whatever the file size. The algorithm
//! is chosen from the length of the expected hex digest.
//!
//! # Supported Hash Types
//!
//! - **SHA-1**: 40 hexadecimal characters
//! - **SHA-256**: 64 hexadecimal characters
//!
//! # Examples
//!
//! ```rust
//! use modelfetch::integrity::{detect_hash_type, HashType};
//!
//! let sha1 = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
//! assert_eq!(detect_hash_type(sha1), Some(HashType::Sha1));
//! assert_eq!(detect_hash_type("not-a-digest"), None);
//! ```
//!
//! ```rust,no_run
//! use modelfetch::integrity::verify;
//! use std::path::Path;
//!
//! # fn example() -> modelfetch::Result<()> {
//! let ok = verify(
//!     Path::new("gpt-j-hf/config.json"),
//!     "a0af27bcff3c0fa17ec9718ffb6060b8db5e54e4",
//! )?;
//! println!("config.json is {}", if ok { "intact" } else { "corrupt" });
//! # Ok(())
//! # }
//! ```

pub mod digest;

pub use digest::{detect_hash_type, digest, verify, HashType, IntegrityChecker, CHUNK_SIZE};
