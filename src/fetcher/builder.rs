//! Builder pattern implementation for creating Fetcher instances.
//!
//! # Examples
//!
//! ```rust
//! use modelfetch::FetcherBuilder;
//! use reqwest::header::{self, HeaderValue};
//!
//! let fetcher = FetcherBuilder::new()
//!     .retries(2)
//!     .header(header::USER_AGENT, HeaderValue::from_static("modelfetch/0.1"))
//!     .on_event(|event| eprintln!("{}", event))
//!     .build();
//! assert_eq!(fetcher.retries(), 2);
//! ```

use super::{config::FetcherConfig, fetcher::Fetcher};
use crate::progress::{FetchEvent, ProgressBarOpts, StyleOptions};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::Proxy;
use std::sync::Arc;

/// A builder used to create a [`Fetcher`].
#[derive(Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        FetcherBuilder::default().style_options(StyleOptions::new(
            ProgressBarOpts::hidden(),
            ProgressBarOpts::hidden(),
        ))
    }

    /// Set the number of retries of transient transport failures.
    ///
    /// Integrity failures are never retried.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the block size, in bytes, of disk writes during a transfer and of
    /// reads when digesting a file.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    /// Set the progress bar style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set the callback receiving fetch events.
    ///
    /// It is called synchronously from the fetch, once per event, including
    /// once per received chunk.
    pub fn on_event<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FetchEvent<'_>) + Send + Sync + 'static,
    {
        self.config.on_event = Some(Arc::new(Box::new(callback)));
        self
    }

    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Fetcher`] with the specified options.
    pub fn build(self) -> Fetcher {
        Fetcher::new(self.config)
    }
}
