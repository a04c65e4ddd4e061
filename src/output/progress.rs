use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the equal-distance estimate, counting matches found.
///
/// The bar is disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct EstimateProgress {
    progress_bar: ProgressBar,
}

impl EstimateProgress {
    /// Creates a progress bar that completes after `target` matches.
    ///
    /// Draws to stderr so stdout stays clean for the result.
    ///
    /// # Panics
    ///
    /// Panics if the progress bar template is invalid, which it is not.
    #[must_use]
    pub fn new(target: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(target, quiet, is_tty)
    }

    fn new_with_visibility(target: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(target)
        };

        Self { progress_bar }
    }

    fn create_visible_progress_bar(target: u64) -> ProgressBar {
        let pb = ProgressBar::new(target);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} Sampling [{bar:40.cyan/blue}] {pos}/{len} equal pairs ({percent}%)",
                )
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Records the running number of matches.
    pub fn set_found(&self, found: u64) {
        self.progress_bar.set_position(found);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
