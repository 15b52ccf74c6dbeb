//! Widget configuration passed through to the presentation layer.
//!
//! These settings carry no logic of their own. They exist so a host can load
//! one JSON file and hand each widget its knobs.

use crate::error::{Error, Result};
use crate::freshness::Variant;
use crate::reading::{ReadingOptions, ReadingSpeed};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scroll progress bar appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarConfig {
    /// Bar accent color (any CSS color)
    pub color: String,

    /// Bar thickness in pixels
    pub height: u32,

    /// Stacking order
    pub z_index: i32,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            color: "#3b82f6".to_string(),
            height: 3,
            z_index: 50,
        }
    }
}

/// Reading time badge settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingTimeConfig {
    /// Reading speed override
    pub words_per_minute: ReadingSpeed,

    /// Show a decorative clock icon
    pub show_icon: bool,
}

impl Default for ReadingTimeConfig {
    fn default() -> Self {
        Self {
            words_per_minute: ReadingSpeed::default(),
            show_icon: true,
        }
    }
}

impl ReadingTimeConfig {
    /// Reading options matching this configuration.
    pub fn reading_options(&self) -> ReadingOptions {
        ReadingOptions::new().with_speed(self.words_per_minute)
    }
}

/// Freshness line settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessConfig {
    /// Layout variant
    pub variant: Variant,

    /// Show a decorative calendar icon
    pub show_icon: bool,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Inline,
            show_icon: true,
        }
    }
}

/// Configuration for all widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Scroll progress bar
    pub progress_bar: ProgressBarConfig,

    /// Reading time badge
    pub reading_time: ReadingTimeConfig,

    /// Freshness line
    pub freshness: FreshnessConfig,
}

impl WidgetConfig {
    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Load configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded widget config from {}", path.as_ref().display());
        Self::from_json_str(&json)
    }
}
