//! Reading time estimation.

use super::markup::{split_frontmatter, strip_markup};
use super::{ReadingOptions, ReadingSpeed};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Estimated reading time for a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingEstimate {
    /// Whole minutes, never less than 1
    pub minutes: u32,

    /// Words counted after markup was stripped
    pub words: usize,
}

impl ReadingEstimate {
    /// Build an estimate from a word count and reading speed.
    ///
    /// Minutes are rounded up and floored at 1, so even empty content
    /// reports a one minute read.
    pub fn from_words(words: usize, speed: ReadingSpeed) -> Self {
        let wpm = speed.get() as usize;
        let minutes = words.div_ceil(wpm).max(1);
        Self {
            minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
            words,
        }
    }

    /// Format as a short label, e.g. `"5 min read"`.
    pub fn label(&self) -> String {
        format(self.minutes)
    }
}

impl std::fmt::Display for ReadingEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

/// Format a minute count as `"{minutes} min read"`.
pub fn format(minutes: u32) -> String {
    format!("{} min read", minutes)
}

/// Reading time estimator with reusable options.
#[derive(Debug, Clone, Default)]
pub struct ReadingTimeEstimator {
    options: ReadingOptions,
}

impl ReadingTimeEstimator {
    /// Create an estimator with the given options.
    pub fn new(options: ReadingOptions) -> Self {
        Self { options }
    }

    /// Create an estimator for a specific reading speed.
    pub fn with_speed(speed: ReadingSpeed) -> Self {
        Self::new(ReadingOptions::new().with_speed(speed))
    }

    /// Get the estimator options.
    pub fn options(&self) -> &ReadingOptions {
        &self.options
    }

    /// Count the words this estimator would use for `content`.
    pub fn count_words(&self, content: &str) -> usize {
        let body = if self.options.skip_frontmatter {
            split_frontmatter(content).map_or(content, |(_, body)| body)
        } else {
            content
        };

        let stripped = strip_markup(body);
        if self.options.normalize_unicode {
            let normalized: String = stripped.nfc().collect();
            normalized.split_whitespace().count()
        } else {
            stripped.split_whitespace().count()
        }
    }

    /// Estimate the reading time of `content`.
    pub fn estimate(&self, content: &str) -> ReadingEstimate {
        let words = self.count_words(content);
        let estimate = ReadingEstimate::from_words(words, self.options.speed);
        log::debug!(
            "estimated {} words at {} as {} minute(s)",
            words,
            self.options.speed,
            estimate.minutes
        );
        estimate
    }
}

/// Estimate reading time at the default speed of 200 words per minute.
pub fn estimate(content: &str) -> ReadingEstimate {
    estimate_with_speed(content, ReadingSpeed::default())
}

/// Estimate reading time at a custom speed.
pub fn estimate_with_speed(content: &str, speed: ReadingSpeed) -> ReadingEstimate {
    ReadingTimeEstimator::with_speed(speed).estimate(content)
}
