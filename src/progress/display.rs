//! Progress bar display for a single transfer.

use crate::progress::StyleOptions;
use indicatif::ProgressBar;

/// Creates and finishes the progress bar of each transfer.
#[derive(Debug, Clone, Default)]
pub struct ProgressDisplay {
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display.
    pub fn new(style_options: StyleOptions) -> Self {
        Self { style_options }
    }

    /// Create the progress bar for one transfer.
    ///
    /// A known `total` gets the bar style, an unknown one the spinner style.
    pub fn create_progress(&self, total: Option<u64>, message: String) -> ProgressBar {
        let opts = match total {
            Some(_) => self.style_options.bar(),
            None => self.style_options.spinner(),
        };
        opts.clone().to_progress_bar(total).with_message(message)
    }

    /// Finish a progress bar, clearing it if its style asks for it.
    pub fn finish(&self, pb: ProgressBar) {
        let clear = match pb.length() {
            Some(_) => self.style_options.bar().clear,
            None => self.style_options.spinner().clear,
        };
        if clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressBarOpts;

    #[test]
    fn test_hidden_display() {
        let display = ProgressDisplay::new(StyleOptions::new(
            ProgressBarOpts::hidden(),
            ProgressBarOpts::hidden(),
        ));
        let pb = display.create_progress(Some(10), "config.json".into());
        assert!(pb.is_hidden());
        pb.inc(10);
        display.finish(pb);
    }

    #[test]
    fn test_progress_tracks_position() {
        let display = ProgressDisplay::default();
        let pb = display.create_progress(None, "pytorch_model.bin".into());
        pb.inc(1024);
        pb.inc(1);
        assert_eq!(pb.position(), 1025);
        display.finish(pb);
    }
}
