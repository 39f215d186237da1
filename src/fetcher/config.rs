//! Configuration structures and defaults for the fetcher.

use crate::integrity::CHUNK_SIZE;
use crate::progress::{EventCallback, StyleOptions};

use reqwest::header::HeaderMap;
use reqwest::Proxy;
use std::sync::Arc;

/// Configuration structure for the fetcher
#[derive(Clone)]
pub struct FetcherConfig {
    /// Number of retries of transient transport failures. Zero by default.
    pub retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Block size of transfer writes and digest reads.
    pub chunk_size: usize,
    /// Progress bar style options.
    pub style_options: StyleOptions,
    /// Callback receiving every fetch event.
    pub on_event: Option<Arc<EventCallback>>,
}

impl std::fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("retries", &self.retries)
            .field("proxy", &self.proxy)
            .field("headers", &self.headers)
            .field("chunk_size", &self.chunk_size)
            .field("style_options", &self.style_options)
            .field("on_event", &self.on_event.is_some())
            .finish()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            retries: 0,
            proxy: None,
            headers: None,
            chunk_size: CHUNK_SIZE,
            style_options: StyleOptions::default(),
            on_event: None,
        }
    }
}
