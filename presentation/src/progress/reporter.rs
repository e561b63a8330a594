//! Spinner shown while a generation request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner covering the single blocking round trip to the model.
///
/// There is no partial output to report — the response arrives as one unit —
/// so the spinner just keeps the terminal alive until the call returns.
pub struct GenerationSpinner {
    bar: ProgressBar,
}

impl GenerationSpinner {
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message("Generating content...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stop and erase the spinner before the reply is printed.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
