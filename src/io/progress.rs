//! Progress display for large generation batches

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks generated drawings against the requested count
///
/// Small batches finish too quickly to be worth drawing; below the
/// threshold the bar is hidden.
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a progress tracker for `total` drawings
    pub fn new(total: usize) -> Self {
        let bar = if Self::draws_for(total) {
            ProgressBar::new(total as u64)
        } else {
            ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden())
        };
        bar.set_style(GENERATION_STYLE.clone());
        bar.set_message("Generating");
        Self { bar }
    }

    /// Whether a batch of `total` drawings is large enough to show a bar
    pub const fn draws_for(total: usize) -> bool {
        total >= PROGRESS_THRESHOLD
    }

    /// Create a tracker that never draws
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Record one completed drawing
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
