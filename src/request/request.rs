//! The description of a single file to fetch.
//!
//! A [`FetchRequest`] names the remote file, where it should land, whether an
//! existing copy may be reused, and the digest it must have.
//!
//! # Destination Resolution
//!
//! The last two segments of the URL path form the relative destination, so
//! `https://host/models/gpt-j-hf/config.json` lands in `gpt-j-hf/config.json`:
//!
//! - no destination hint: relative to the working directory;
//! - hint naming an existing directory `D`: under `D`;
//! - any other hint: the hint itself is the destination.
//!
//! ```rust
//! use modelfetch::request::FetchRequest;
//! use std::path::Path;
//!
//! # fn example() -> modelfetch::Result<()> {
//! let request = FetchRequest::try_from("https://host/a/b/file.bin")?;
//! assert_eq!(request.resolve()?, Path::new("b/file.bin"));
//!
//! let request = request.with_destination("weights.bin");
//! assert_eq!(request.resolve()?, Path::new("weights.bin"));
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};

use percent_encoding::percent_decode_str;
use reqwest::Url;
use std::convert::TryFrom;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Represents a file to be fetched.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// URL of the file to fetch.
    pub url: Url,
    /// Destination hint: a directory to fetch into, or the exact file path.
    pub destination: Option<PathBuf>,
    /// Transfer even when a local copy already matches the hash.
    pub overwrite: bool,
    /// Expected hex digest (SHA-1 or SHA-256) of the file.
    pub hash: Option<String>,
}

impl FetchRequest {
    /// Creates a new [`FetchRequest`] without destination hint or hash.
    ///
    /// Unlike [`FetchRequest::try_from`], the URL path is not validated here;
    /// an unusable path is reported when the destination is resolved.
    pub fn new(url: &Url) -> Self {
        Self {
            url: url.clone(),
            destination: None,
            overwrite: false,
            hash: None,
        }
    }

    /// Sets the destination hint.
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Sets the expected digest.
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Sets whether an existing, valid local copy is fetched again.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Resolves the local path the file is written to.
    ///
    /// This only inspects the filesystem to find out whether the destination
    /// hint is a directory; nothing is created.
    pub fn resolve(&self) -> Result<PathBuf> {
        let hint = match self.destination {
            Some(ref hint) => expand_home(hint),
            None => return self.relative_path(),
        };

        if hint.is_dir() {
            Ok(hint.join(self.relative_path()?))
        } else {
            Ok(hint)
        }
    }

    /// The destination relative to the chosen base directory: the last two
    /// decoded URL path segments, or the last one if the path has only one.
    fn relative_path(&self) -> Result<PathBuf> {
        let segments: Vec<&str> = self
            .url
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "The url \"{}\" does not contain a valid path",
                    self.url
                ))
            })?
            .collect();

        let filename = match segments.last() {
            Some(last) if !last.is_empty() => decode_segment(&self.url, last)?,
            _ => {
                return Err(Error::InvalidUrl(format!(
                    "The url \"{}\" does not contain a filename",
                    self.url
                )))
            }
        };

        match segments.len().checked_sub(2).map(|i| segments[i]) {
            Some(parent) if !parent.is_empty() => {
                Ok(Path::new(&decode_segment(&self.url, parent)?).join(filename))
            }
            _ => Ok(PathBuf::from(filename)),
        }
    }
}

/// Percent-decodes one path segment, refusing anything that would not stay a
/// single plain path component.
fn decode_segment(url: &Url, segment: &str) -> Result<String> {
    let decoded = percent_decode_str(segment)
        .decode_utf8()
        .map_err(|e| {
            Error::InvalidUrl(format!(
                "The url \"{}\" has a path segment that is not UTF-8: {}",
                url, e
            ))
        })?
        .into_owned();

    let mut components = Path::new(&decoded).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == decoded.as_str() => Ok(decoded),
        _ => Err(Error::InvalidUrl(format!(
            "The url \"{}\" has an unusable path segment \"{}\"",
            url, decoded
        ))),
    }
}

/// Expands a leading `~` to the user's home directory.
fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

impl TryFrom<&Url> for FetchRequest {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self> {
        let request = FetchRequest::new(value);
        request.relative_path()?;
        Ok(request)
    }
}

impl TryFrom<&str> for FetchRequest {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| FetchRequest::try_from(&u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_hint_uses_last_two_segments() {
        let r = FetchRequest::try_from("https://host/a/b/file.bin").unwrap();
        assert_eq!(r.resolve().unwrap(), PathBuf::from("b").join("file.bin"));
    }

    #[test]
    fn test_resolve_with_directory_hint() {
        let dir = tempfile::tempdir().unwrap();
        let r = FetchRequest::try_from("https://host/a/b/file.bin")
            .unwrap()
            .with_destination(dir.path());
        assert_eq!(r.resolve().unwrap(), dir.path().join("b").join("file.bin"));
    }

    #[test]
    fn test_resolve_with_file_hint() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("weights.bin");
        let r = FetchRequest::try_from("https://host/a/b/file.bin")
            .unwrap()
            .with_destination(&target);
        assert_eq!(r.resolve().unwrap(), target);
    }

    #[test]
    fn test_resolve_single_segment() {
        let r = FetchRequest::try_from("https://host/file.bin").unwrap();
        assert_eq!(r.resolve().unwrap(), PathBuf::from("file.bin"));
    }

    #[test]
    fn test_resolve_decodes_segments() {
        let r = FetchRequest::try_from("https://host/my%20model/file%2Bv2.bin").unwrap();
        assert_eq!(
            r.resolve().unwrap(),
            PathBuf::from("my model").join("file+v2.bin")
        );
    }

    #[test]
    fn test_try_from_rejects_missing_filename() {
        assert!(matches!(
            FetchRequest::try_from("https://host/a/b/"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            FetchRequest::try_from("https://host"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_try_from_rejects_encoded_separator() {
        assert!(matches!(
            FetchRequest::try_from("https://host/a/..%2Fetc%2Fpasswd"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_try_from_rejects_unparsable_url() {
        assert!(matches!(
            FetchRequest::try_from("not a url"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_builder_methods() {
        let r = FetchRequest::try_from("https://host/a/b.bin")
            .unwrap()
            .with_hash("abc")
            .overwrite(true);
        assert_eq!(r.hash.as_deref(), Some("abc"));
        assert!(r.overwrite);
        assert!(r.destination.is_none());
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = env::var_os("HOME") {
            assert_eq!(
                expand_home(Path::new("~/models")),
                PathBuf::from(home).join("models")
            );
        }
        assert_eq!(expand_home(Path::new("models/~")), PathBuf::from("models/~"));
    }
}
