//! Progress display for wavelength sweeps

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks evaluated steps of a parameter sweep
///
/// A hidden tracker keeps the same interface but draws nothing, so callers
/// never branch on whether progress is shown.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Visible progress bar for `steps` evaluations
    pub fn new(steps: usize) -> Self {
        let bar = ProgressBar::new(steps as u64);
        bar.set_style(SWEEP_STYLE.clone());
        Self { bar }
    }

    /// Tracker that draws nothing
    pub fn hidden(steps: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(steps as u64);
        Self { bar }
    }

    /// Record one finished evaluation at `wavelength` meters
    pub fn advance(&self, wavelength: f64) {
        self.bar.set_message(format!("{:.0} nm", wavelength * 1e9));
        self.bar.inc(1);
    }

    /// Steps completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
