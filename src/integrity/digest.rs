//! Streaming file digests and their comparison with an expected value.

use crate::error::{Error, Result};

use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Default number of bytes read from disk per hash update (1 MiB).
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// SHA-1, 40 hex characters.
    Sha1,
    /// SHA-256, 64 hex characters.
    Sha256,
}

impl HashType {
    /// Length of the hex encoding of a digest of this type.
    pub fn hex_len(self) -> usize {
        match self {
            HashType::Sha1 => 40,
            HashType::Sha256 => 64,
        }
    }
}

/// Detect the hash type based on the hex digest format.
///
/// # Examples
///
/// ```
/// use modelfetch::integrity::{detect_hash_type, HashType};
///
/// assert_eq!(
///     detect_hash_type("bab870fc9b82f0bfb3f6cbf4bd6bec3f3add05a6"),
///     Some(HashType::Sha1)
/// );
/// assert_eq!(detect_hash_type("bab870fc"), None);
/// ```
pub fn detect_hash_type(hash: &str) -> Option<HashType> {
    if !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    [HashType::Sha1, HashType::Sha256]
        .into_iter()
        .find(|t| t.hex_len() == hash.len())
}

/// Computes and checks file digests, reading `chunk_size` bytes at a time.
#[derive(Debug, Clone, Copy)]
pub struct IntegrityChecker {
    chunk_size: usize,
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }
}

impl IntegrityChecker {
    /// Creates a checker reading `chunk_size` bytes per update.
    ///
    /// A zero chunk size is raised to one byte.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Gets the read size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the lowercase hex digest of the file at `path`.
    ///
    /// Fails with [`Error::FileNotFound`] if there is no such file.
    pub fn digest(&self, path: &Path, hash_type: HashType) -> Result<String> {
        match hash_type {
            HashType::Sha1 => self.digest_with::<Sha1>(path),
            HashType::Sha256 => self.digest_with::<Sha256>(path),
        }
    }

    /// Returns `true` iff the digest of `path` equals `expected`.
    ///
    /// The comparison is an exact, case-sensitive match on the hex text.
    /// `expected` must be a SHA-1 or SHA-256 hex digest.
    pub fn verify(&self, path: &Path, expected: &str) -> Result<bool> {
        Ok(self.check(path, expected)?.is_none())
    }

    /// Like [`verify`](Self::verify), but hands back the actual digest on mismatch.
    pub(crate) fn check(&self, path: &Path, expected: &str) -> Result<Option<String>> {
        let hash_type = detect_hash_type(expected).ok_or_else(|| {
            Error::InvalidHash(format!(
                "\"{}\" is neither a SHA-1 nor a SHA-256 hex digest",
                expected
            ))
        })?;
        let actual = self.digest(path, hash_type)?;
        debug!("Digest of {:?} is {}", path, actual);
        Ok((actual != expected).then_some(actual))
    }

    fn digest_with<D: Digest>(&self, path: &Path) -> Result<String> {
        let mut file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::from(e),
        })?;

        let mut hasher = D::new();
        let mut buf = vec![0u8; self.chunk_size];
        loop {
            let n = match file.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            hasher.update(&buf[..n]);
        }

        Ok(hex::encode(hasher.finalize()))
    }
}

/// Returns the hex digest of `path` using the default chunk size.
pub fn digest(path: &Path, hash_type: HashType) -> Result<String> {
    IntegrityChecker::default().digest(path, hash_type)
}

/// Returns `true` iff the digest of `path` equals `expected`, using the
/// default chunk size.
pub fn verify(path: &Path, expected: &str) -> Result<bool> {
    IntegrityChecker::default().verify(path, expected)
}
