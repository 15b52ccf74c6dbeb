//! Published/updated date display.

use super::timestamp::parse_timestamp;
use super::{ErrorMode, FreshnessOptions, Variant};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Display decision for a publish/update timestamp pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freshness {
    /// Formatted publish date
    pub published: String,

    /// Formatted update date, present only when `is_updated` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    /// Whether the content changed strictly after it was published
    pub is_updated: bool,

    /// Parsed publish instant
    pub published_at: DateTime<Utc>,

    /// Parsed update instant, if one was given and parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Freshness {
    /// Render as plain text in the given layout.
    ///
    /// ```
    /// use pagepulse::freshness::{describe, Variant};
    ///
    /// let freshness = describe("2024-01-01", Some("2024-06-01")).unwrap();
    /// assert_eq!(
    ///     freshness.render(Variant::Inline),
    ///     "Published January 1, 2024 · Updated June 1, 2024"
    /// );
    /// ```
    pub fn render(&self, variant: Variant) -> String {
        let published = format!("Published {}", self.published);
        match (&self.updated, variant) {
            (None, _) => published,
            (Some(updated), Variant::Inline) => format!("{} · Updated {}", published, updated),
            (Some(updated), Variant::Block) => format!("{}\nUpdated {}", published, updated),
        }
    }
}

/// Formats publish and update timestamps for display.
#[derive(Debug, Clone, Default)]
pub struct FreshnessFormatter {
    options: FreshnessOptions,
}

impl FreshnessFormatter {
    /// Create a formatter with the given options.
    pub fn new(options: FreshnessOptions) -> Self {
        Self { options }
    }

    /// Get the formatter options.
    pub fn options(&self) -> &FreshnessOptions {
        &self.options
    }

    /// Describe a publish timestamp and optional update timestamp.
    ///
    /// `is_updated` requires `updated_at` to be strictly later than
    /// `published_at`; equal instants are not an update.
    pub fn describe(&self, published_at: &str, updated_at: Option<&str>) -> Result<Freshness> {
        let published = parse_timestamp(published_at)?;

        let updated = match updated_at.map(parse_timestamp).transpose() {
            Ok(updated) => updated,
            Err(err) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("ignoring update timestamp: {}", err);
                None
            }
            Err(err) => return Err(err),
        };

        let is_updated = updated.is_some_and(|updated| updated > published);

        let freshness = Freshness {
            published: self.format_date(&published)?,
            updated: match updated {
                Some(ref dt) if is_updated => Some(self.format_date(dt)?),
                _ => None,
            },
            is_updated,
            published_at: published,
            updated_at: updated,
        };

        log::debug!(
            "freshness for {}: updated={}",
            published_at,
            freshness.is_updated
        );
        Ok(freshness)
    }

    /// Format an instant with the configured date pattern.
    pub fn format_date(&self, dt: &DateTime<Utc>) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", dt.format(&self.options.date_format)).map_err(|_| {
            Error::InvalidConfig(format!("invalid date format '{}'", self.options.date_format))
        })?;
        Ok(out)
    }
}

/// Describe timestamps with default options (strict parsing, long-form dates).
pub fn describe(published_at: &str, updated_at: Option<&str>) -> Result<Freshness> {
    FreshnessFormatter::default().describe(published_at, updated_at)
}
