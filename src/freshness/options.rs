//! Freshness formatting options and configuration.

use serde::{Deserialize, Serialize};

/// Default long-form date pattern, e.g. "January 5, 2024".
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Options for describing content freshness.
#[derive(Debug, Clone)]
pub struct FreshnessOptions {
    /// Error handling mode for malformed timestamps
    pub error_mode: ErrorMode,

    /// strftime-style pattern used for displayed dates
    pub date_format: String,
}

impl FreshnessOptions {
    /// Create new freshness options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (ignore a malformed update timestamp).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the display date pattern.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}

impl Default for FreshnessOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Error handling mode for timestamp parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any malformed timestamp
    #[default]
    Strict,
    /// Treat a malformed update timestamp as "not updated"
    Lenient,
}

/// Layout variant for freshness display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Single line
    #[default]
    Inline,
    /// One line per date
    Block,
}
