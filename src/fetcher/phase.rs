//! The states a single fetch moves through.
//!
//! ```text
//! Unchecked ──> Verified (skip) | Mismatch | Transferring
//! Transferring ──> Verified | Unverified | Mismatch
//! ```
//!
//! The pre-transfer check and the post-transfer check go through the same
//! `Verified`/`Mismatch` states, so a skipped file and a fetched file are
//! held to the same rule.

/// A state of a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Nothing is known about the destination yet.
    Unchecked,
    /// The body is being streamed to the destination.
    Transferring,
    /// The file has the expected digest. `transferred` is `None` when the
    /// existing file was reused.
    Verified { transferred: Option<u64> },
    /// The file was transferred and no digest was expected.
    Unverified { transferred: u64 },
    /// The file does not have the expected digest.
    Mismatch { actual: String },
}

impl Phase {
    /// The state reached once the digest is known: `mismatch` carries the
    /// actual digest when it differs from the expected one.
    pub(crate) fn after_check(mismatch: Option<String>, transferred: Option<u64>) -> Phase {
        match mismatch {
            None => Phase::Verified { transferred },
            Some(actual) => Phase::Mismatch { actual },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_check() {
        assert_eq!(
            Phase::after_check(None, None),
            Phase::Verified { transferred: None }
        );
        assert_eq!(
            Phase::after_check(None, Some(7)),
            Phase::Verified {
                transferred: Some(7)
            }
        );
        assert_eq!(
            Phase::after_check(Some("abc".into()), Some(7)),
            Phase::Mismatch {
                actual: "abc".into()
            }
        );
    }
}
