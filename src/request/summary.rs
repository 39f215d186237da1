//! Fetch results.
//!
//! A fetch that succeeds hands back a [`Summary`]; a fetch that fails returns
//! an [`Error`](crate::Error), whose [`outcome`](crate::Error::outcome) tells
//! integrity failures apart from transport failures.

use super::request::FetchRequest;

use std::fmt;
use std::path::{Path, PathBuf};

/// How a fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The local file already had the expected digest; nothing was transferred.
    Skipped,
    /// The file was transferred, and verified if a hash was given.
    Fetched,
    /// The local or freshly transferred file does not have the expected digest.
    FailedIntegrity,
    /// The server refused the request or the connection failed.
    FailedTransport,
}

impl fmt::Display for TransferOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransferOutcome::Skipped => "skipped",
            TransferOutcome::Fetched => "fetched",
            TransferOutcome::FailedIntegrity => "failed integrity check",
            TransferOutcome::FailedTransport => "failed transport",
        };
        f.write_str(s)
    }
}

/// Represents the summary of a successful fetch.
#[derive(Debug, Clone)]
pub struct Summary {
    /// The request that was served.
    request: FetchRequest,
    /// Where the file is on disk.
    path: PathBuf,
    /// Skipped or fetched.
    outcome: TransferOutcome,
    /// Size of the file on disk in bytes.
    size: u64,
    /// Whether the digest was checked.
    verified: bool,
}

impl Summary {
    pub(crate) fn skipped(request: FetchRequest, path: PathBuf, size: u64) -> Self {
        Self {
            request,
            path,
            outcome: TransferOutcome::Skipped,
            size,
            verified: true,
        }
    }

    pub(crate) fn fetched(request: FetchRequest, path: PathBuf, size: u64, verified: bool) -> Self {
        Self {
            request,
            path,
            outcome: TransferOutcome::Fetched,
            size,
            verified,
        }
    }

    /// Get a reference to the request this summary answers.
    pub fn request(&self) -> &FetchRequest {
        &self.request
    }

    /// Get the resolved path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the summary, keeping the resolved path.
    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// Get the outcome.
    pub fn outcome(&self) -> TransferOutcome {
        self.outcome
    }

    /// Get the size of the file on disk.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Whether the file's digest matched an expected hash.
    #[must_use]
    pub fn verified(&self) -> bool {
        self.verified
    }
}
