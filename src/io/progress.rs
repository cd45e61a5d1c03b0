//! Spinner showing search progress while paths are enumerated

use crate::algorithm::search::{SearchObserver, SearchStats, Solution};
use crate::io::configuration::{PROGRESS_TEMPLATE, PROGRESS_TICK_CHARS, PROGRESS_TICK_MS};
use crate::spatial::grid::Position;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(PROGRESS_TICK_CHARS)
});

/// Search observer that counts activity and optionally drives a spinner
///
/// The spinner position is the number of candidate paths enumerated so far;
/// its message shows how many solutions have been found.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    stats: SearchStats,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Create a reporter drawing a spinner on stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner().with_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self::with_bar(Some(bar))
    }

    /// Create a reporter that only counts
    pub const fn hidden() -> Self {
        Self::with_bar(None)
    }

    const fn with_bar(bar: Option<ProgressBar>) -> Self {
        Self {
            bar,
            stats: SearchStats {
                paths_enumerated: 0,
                words_matched: 0,
                solutions_found: 0,
            },
        }
    }

    /// Counts collected so far
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

impl SearchObserver for ProgressReporter {
    fn path_enumerated(&mut self, path: &[Position]) {
        self.stats.path_enumerated(path);
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    fn word_matched(&mut self, depth: usize, word: &str) {
        self.stats.word_matched(depth, word);
    }

    fn solution_found(&mut self, solution: &Solution) {
        self.stats.solution_found(solution);
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("{} solutions", self.stats.solutions_found));
        }
    }
}
