//! JSON output for estimates, freshness decisions and batch summaries.

use crate::error::{Error, Result};
use serde::Serialize;

/// Layout of emitted JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Indented, one field per line (for people)
    #[default]
    Pretty,
    /// Single line (for pipes and logs)
    Compact,
}

/// Render a result value as JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let rendered = if format == JsonFormat::Compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.map_err(|e| Error::Render(format!("cannot encode result as JSON: {}", e)))
}
