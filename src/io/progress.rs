//! Progress display for seed surveys

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static SURVEY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Seeds: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many seeds of a survey have been generated
///
/// A quiet tracker counts without drawing anything.
pub struct SurveyProgress {
    bar: ProgressBar,
}

impl SurveyProgress {
    /// Create a tracker for `total` seeds
    pub fn new(total: u64, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(total)
        } else {
            ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden())
        };
        bar.set_style(SURVEY_STYLE.clone());
        Self { bar }
    }

    /// Record one finished seed
    pub fn advance(&self, seed: u32) {
        self.bar.set_message(format!("seed {seed}"));
        self.bar.inc(1);
    }

    /// Seeds recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
