//! Progress reporting.
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - Creation and completion of the progress bar of a transfer
//! - `event` - Fetch events handed to the caller's callback
//!
//! # Examples
//!
//! ```rust
//! use modelfetch::progress::{ProgressBarOpts, StyleOptions};
//! use modelfetch::FetcherBuilder;
//!
//! let fetcher = FetcherBuilder::new()
//!     .style_options(StyleOptions::new(
//!         ProgressBarOpts::with_pip_style(),
//!         ProgressBarOpts::hidden(),
//!     ))
//!     .build();
//! ```

pub(crate) mod display;
pub(crate) mod event;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use event::{EventCallback, FetchEvent};
pub use style::{ProgressBarOpts, StyleOptions};
