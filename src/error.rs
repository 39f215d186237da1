//! Error handling for modelfetch.
//!
//! Every failure of a fetch surfaces as one [`Error`] value and is returned
//! to the caller unmodified. Nothing in this crate retries on its own.

use crate::request::TransferOutcome;

use reqwest::{StatusCode, Url};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when fetching or verifying a file.
#[derive(Error, Debug)]
pub enum Error {
    /// A file that had to be digested does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The server answered with a non-success status, or the connection
    /// failed while the request was sent or the body was streamed.
    ///
    /// `status` is `None` when no response status was received.
    #[error("Transport error fetching {url}{}", status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default())]
    Transport {
        url: Url,
        status: Option<StatusCode>,
        #[source]
        source: Option<reqwest_middleware::Error>,
    },

    /// The digest of a local file differs from the expected one.
    ///
    /// Raised both for a pre-existing file and for a freshly transferred one.
    /// The file is left on disk in both cases.
    #[error(
        "File {} is downloaded but the content hash does not match (expected {expected}, got {actual}). Please retry.",
        path.display()
    )]
    IntegrityViolation {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// The URL cannot be parsed or does not name a file.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The expected hash is not a hex digest of a supported algorithm.
    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    /// I/O Error.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library while building the HTTP client.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
}

impl Error {
    /// The failed [`TransferOutcome`] this error stands for, if any.
    ///
    /// Only integrity and transport failures have a matching outcome; the
    /// other variants are caller or environment errors.
    pub fn outcome(&self) -> Option<TransferOutcome> {
        match self {
            Error::IntegrityViolation { .. } => Some(TransferOutcome::FailedIntegrity),
            Error::Transport { .. } => Some(TransferOutcome::FailedTransport),
            _ => None,
        }
    }
}

/// Result type alias for operations that can fail with a modelfetch error.
pub type Result<T> = std::result::Result<T, Error>;
