//! Core fetcher implementation.
//!
//! A fetch resolves the destination of a [`FetchRequest`], reuses the local
//! file when it already has the expected digest, and otherwise streams the
//! body to disk and checks the result.
//!
//! # Examples
//!
//! ```rust,no_run
//! use modelfetch::{FetchRequest, FetcherBuilder, TransferOutcome};
//! use std::convert::TryFrom;
//!
//! # async fn example() -> modelfetch::Result<()> {
//! let fetcher = FetcherBuilder::new().build();
//! let request = FetchRequest::try_from("https://example.com/gpt-j-hf/config.json")?
//!     .with_hash("a0af27bcff3c0fa17ec9718ffb6060b8db5e54e4");
//!
//! let summary = fetcher.fetch(&request).await?;
//! match summary.outcome() {
//!     TransferOutcome::Skipped => println!("{} already valid", summary.path().display()),
//!     _ => println!("{} fetched", summary.path().display()),
//! }
//! # Ok(())
//! # }
//! ```

use super::config::FetcherConfig;
use super::phase::Phase;
use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::integrity::{detect_hash_type, IntegrityChecker};
use crate::progress::{FetchEvent, ProgressDisplay};
use crate::request::{FetchRequest, Summary};
use crate::utils::content_length::declared_total;

use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::io;
use std::path::Path;
use tokio::{fs, io::AsyncWriteExt, task};
use tracing::{debug, info, warn};

/// Represents the fetch controller.
///
/// A fetcher can be created via its builder:
///
/// ```rust
/// use modelfetch::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build();
/// ```
#[derive(Clone)]
pub struct Fetcher {
    config: FetcherConfig,
    progress: ProgressDisplay,
}

impl Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl Fetcher {
    /// Creates a new Fetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        let progress = ProgressDisplay::new(config.style_options.clone());
        Self { config, progress }
    }

    /// Gets the number of retries of transient transport failures.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the block size of transfer writes and digest reads.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    fn client(&self) -> Result<ClientWithMiddleware> {
        let config = HttpClientConfig {
            retries: self.config.retries,
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        };
        Ok(create_http_client(config)?)
    }

    /// Fetches one file.
    ///
    /// Returns once the file is known to be valid (or was transferred without
    /// an expected hash), or with the first error encountered.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<Summary> {
        let client = self.client()?;
        self.fetch_with(&client, request).await
    }

    /// Fetches the files one after the other, stopping at the first failure.
    ///
    /// Callers must not list the same destination twice.
    pub async fn fetch_all(&self, requests: &[FetchRequest]) -> Result<Vec<Summary>> {
        let client = self.client()?;
        let mut summaries = Vec::with_capacity(requests.len());
        for request in requests {
            summaries.push(self.fetch_with(&client, request).await?);
        }
        Ok(summaries)
    }

    async fn fetch_with(
        &self,
        client: &ClientWithMiddleware,
        request: &FetchRequest,
    ) -> Result<Summary> {
        if let Some(ref hash) = request.hash {
            if detect_hash_type(hash).is_none() {
                return Err(Error::InvalidHash(format!(
                    "\"{}\" is neither a SHA-1 nor a SHA-256 hex digest",
                    hash
                )));
            }
        }

        let path = request.resolve()?;
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            debug!("Creating destination directory {:?}", dir);
            fs::create_dir_all(dir).await?;
        }

        let checker = IntegrityChecker::new(self.config.chunk_size);
        let expected = request.hash.as_deref();
        let mut phase = Phase::Unchecked;

        loop {
            debug!("{:?} is {:?}", path, phase);
            phase = match phase {
                Phase::Unchecked => match expected {
                    Some(expected) if path.exists() && !request.overwrite => {
                        self.check(&checker, &path, expected, None).await?
                    }
                    _ => Phase::Transferring,
                },
                Phase::Transferring => {
                    let bytes = self.transfer(client, request, &path).await?;
                    match expected {
                        Some(expected) => {
                            self.check(&checker, &path, expected, Some(bytes)).await?
                        }
                        None => Phase::Unverified { transferred: bytes },
                    }
                }
                Phase::Verified { transferred: None } => {
                    let size = fs::metadata(&path).await?.len();
                    info!("Reusing {:?}, content hash matches", path);
                    return Ok(Summary::skipped(request.clone(), path, size));
                }
                Phase::Verified {
                    transferred: Some(bytes),
                } => return Ok(Summary::fetched(request.clone(), path, bytes, true)),
                Phase::Unverified { transferred } => {
                    return Ok(Summary::fetched(request.clone(), path, transferred, false))
                }
                Phase::Mismatch { actual } => {
                    return Err(Error::IntegrityViolation {
                        path,
                        expected: expected.unwrap_or_default().to_string(),
                        actual,
                    })
                }
            };
        }
    }

    /// Digests the file at `path` and moves to `Verified` or `Mismatch`.
    ///
    /// The digest runs on the blocking pool.
    async fn check(
        &self,
        checker: &IntegrityChecker,
        path: &Path,
        expected: &str,
        transferred: Option<u64>,
    ) -> Result<Phase> {
        self.emit(&FetchEvent::Checking {
            path,
            transferred: transferred.is_some(),
        });

        let mismatch = {
            let checker = *checker;
            let path = path.to_path_buf();
            let expected = expected.to_string();
            task::spawn_blocking(move || checker.check(&path, &expected))
                .await
                .map_err(|e| Error::from(io::Error::new(io::ErrorKind::Other, e)))??
        };
        match mismatch {
            None => self.emit(&FetchEvent::Verified { path }),
            Some(ref actual) => {
                warn!(
                    "Content hash of {:?} is {}, expected {}",
                    path, actual, expected
                );
                self.emit(&FetchEvent::Mismatch {
                    path,
                    expected,
                    actual,
                });
            }
        }

        Ok(Phase::after_check(mismatch, transferred))
    }

    /// Streams the body of `request` into `path` and returns the number of
    /// bytes written.
    ///
    /// The destination is only created (or truncated) once the server has
    /// answered `200 OK`. The body is written in blocks of `chunk_size`
    /// bytes, the last one possibly shorter.
    async fn transfer(
        &self,
        client: &ClientWithMiddleware,
        request: &FetchRequest,
        path: &Path,
    ) -> Result<u64> {
        let url = &request.url;
        self.emit(&FetchEvent::Transferring {
            url,
            path,
            overwrite: path.exists(),
        });

        debug!("Fetching {}", url);
        let res = client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.clone(),
                status: None,
                source: Some(e),
            })?;

        if res.status() != StatusCode::OK {
            return Err(Error::Transport {
                url: url.clone(),
                status: Some(res.status()),
                source: None,
            });
        }

        let total = declared_total(&res);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let pb = self.progress.create_progress(total, name);

        debug!("Creating destination file {:?}", path);
        let mut file = fs::File::create(path).await?;
        let chunk_size = self.config.chunk_size.max(1);
        let mut block: Vec<u8> = Vec::with_capacity(chunk_size);
        let mut received: u64 = 0;

        debug!("Retrieving chunks...");
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let chunk = match item {
                Ok(chunk) => chunk,
                Err(e) => {
                    pb.abandon();
                    drop(file);
                    // A truncated body is not worth keeping.
                    if let Err(rm) = fs::remove_file(path).await {
                        warn!("Could not remove partial file {:?}: {}", path, rm);
                    }
                    return Err(Error::Transport {
                        url: url.clone(),
                        status: None,
                        source: Some(e.into()),
                    });
                }
            };

            let mut rest: &[u8] = &chunk;
            while !rest.is_empty() {
                let take = (chunk_size - block.len()).min(rest.len());
                block.extend_from_slice(&rest[..take]);
                rest = &rest[take..];
                if block.len() == chunk_size {
                    received = self
                        .write_block(&mut file, &mut block, received, total, &pb)
                        .await?;
                }
            }
        }
        if !block.is_empty() {
            received = self
                .write_block(&mut file, &mut block, received, total, &pb)
                .await?;
        }

        file.flush().await?;
        drop(file);
        self.progress.finish(pb);

        info!("Downloaded {} bytes from {} to {:?}", received, url, path);
        self.emit(&FetchEvent::Transferred {
            path,
            bytes: received,
        });
        Ok(received)
    }

    /// Writes and empties `block`, then reports the new byte count.
    async fn write_block(
        &self,
        file: &mut fs::File,
        block: &mut Vec<u8>,
        received: u64,
        total: Option<u64>,
        pb: &ProgressBar,
    ) -> Result<u64> {
        file.write_all(&block[..]).await?;
        let received = received + block.len() as u64;
        block.clear();
        pb.set_position(received);
        self.emit(&FetchEvent::Progress { received, total });
        Ok(received)
    }

    fn emit(&self, event: &FetchEvent<'_>) {
        if let Some(ref callback) = self.config.on_event {
            callback(event);
        }
    }
}
