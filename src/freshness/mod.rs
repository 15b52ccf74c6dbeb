//! Content freshness: published and updated date display.

mod formatter;
mod options;
mod timestamp;

pub use formatter::{describe, Freshness, FreshnessFormatter};
pub use options::{ErrorMode, FreshnessOptions, Variant, DEFAULT_DATE_FORMAT};
pub use timestamp::parse_timestamp;
