//! Progress display for the strategy comparison run

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static STRATEGY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>6} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many strategies have finished during one run
///
/// Draws to stderr, keeping stdout free for the report text. The bar is
/// removed once the run completes.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar spanning the given number of strategies
    pub fn new(strategy_count: usize) -> Self {
        let bar = ProgressBar::new(strategy_count as u64);
        bar.set_style(STRATEGY_STYLE.clone());
        Self { bar }
    }

    /// Show which strategy is currently running
    pub fn start_strategy(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    /// Record one finished strategy
    pub fn complete_strategy(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
