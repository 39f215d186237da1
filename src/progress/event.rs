//! Fetch events delivered to the caller's sink.
//!
//! The fetcher never writes to a global logger on the caller's behalf. It
//! reports what it does through the callback installed with
//! [`FetcherBuilder::on_event`](crate::FetcherBuilder::on_event).
//!
//! ```rust
//! use modelfetch::progress::FetchEvent;
//! use modelfetch::FetcherBuilder;
//!
//! let fetcher = FetcherBuilder::hidden()
//!     .on_event(|event| match event {
//!         FetchEvent::Progress { received, total: Some(total) } => {
//!             eprintln!("{}/{}", received, total)
//!         }
//!         other => eprintln!("{}", other),
//!     })
//!     .build();
//! ```

use reqwest::Url;
use std::fmt;
use std::path::Path;

/// Callback type for fetch events.
pub type EventCallback = Box<dyn Fn(&FetchEvent<'_>) + Send + Sync>;

/// Something observable that happened during a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent<'a> {
    /// The digest of the file at the destination is being computed.
    ///
    /// `transferred` tells a freshly written file from a pre-existing one.
    Checking { path: &'a Path, transferred: bool },
    /// The digest of the file matched the expected hash.
    Verified { path: &'a Path },
    /// The digest of the file did not match the expected hash.
    Mismatch {
        path: &'a Path,
        expected: &'a str,
        actual: &'a str,
    },
    /// A transfer is starting. `overwrite` is set when an existing file is replaced.
    Transferring {
        url: &'a Url,
        path: &'a Path,
        overwrite: bool,
    },
    /// Bytes received so far, against the declared total if there was one.
    Progress { received: u64, total: Option<u64> },
    /// The whole body has been written to disk.
    Transferred { path: &'a Path, bytes: u64 },
}

impl fmt::Display for FetchEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchEvent::Checking {
                path,
                transferred: false,
            } => write!(f, "File {} exists, checking content hash...", path.display()),
            FetchEvent::Checking { path, .. } => write!(
                f,
                "File {} downloaded, checking content hash...",
                path.display()
            ),
            FetchEvent::Verified { path } => write!(f, "File {} checking pass", path.display()),
            FetchEvent::Mismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "File {} content hash mismatch: expected {}, got {}",
                path.display(),
                expected,
                actual
            ),
            FetchEvent::Transferring {
                url,
                path,
                overwrite: true,
            } => write!(f, "File {} exists, overwriting from {}...", path.display(), url),
            FetchEvent::Transferring { url, path, .. } => {
                write!(f, "Downloading {} from {}...", path.display(), url)
            }
            FetchEvent::Progress {
                received,
                total: Some(total),
            } => write!(f, "{}/{} bytes", received, total),
            FetchEvent::Progress { received, .. } => write!(f, "{} bytes", received),
            FetchEvent::Transferred { path, bytes } => {
                write!(f, "File {} downloaded ({} bytes)", path.display(), bytes)
            }
        }
    }
}
