//! # pagepulse
//!
//! Reading time, scroll progress and content freshness for blog frontends.
//!
//! ## Quick Start
//!
//! ```
//! use pagepulse::{describe, estimate, sample, ViewportMetrics};
//!
//! fn main() -> pagepulse::Result<()> {
//!     // Reading time
//!     let reading = estimate("<p>A short post about Rust.</p>");
//!     assert_eq!(reading.to_string(), "1 min read");
//!
//!     // Scroll progress
//!     let progress = sample(&ViewportMetrics::new(800.0, 2800.0, 500.0));
//!     assert_eq!(progress.percent(), 25.0);
//!
//!     // Freshness
//!     let freshness = describe("2024-01-01", Some("2024-06-01"))?;
//!     assert!(freshness.is_updated);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reading time**: markup-aware word counting, rounded up to whole minutes
//! - **Scroll progress**: clamped percentage sampler plus a listener-driven tracker
//! - **Freshness**: published/updated decision with long-form dates
//! - **Batch analysis**: parallel processing of many posts with Rayon

pub mod batch;
pub mod error;
pub mod freshness;
pub mod json;
pub mod reading;
pub mod scroll;
pub mod widget;

// Re-export commonly used types
pub use batch::{analyze_posts, BatchAnalyzer, Post, PostSummary};
pub use error::{Error, Result};
pub use freshness::{describe, Freshness, FreshnessFormatter, FreshnessOptions, Variant};
pub use json::{to_json, JsonFormat};
pub use reading::{
    estimate, estimate_with_speed, format, ReadingEstimate, ReadingOptions, ReadingSpeed,
    ReadingTimeEstimator,
};
pub use scroll::{
    sample, ScrollFraction, ScrollProgressTracker, SimulatedViewport, ViewportHost,
    ViewportMetrics,
};
pub use widget::WidgetConfig;

use std::path::Path;

/// Estimate the reading time of a file.
///
/// # Example
///
/// ```no_run
/// use pagepulse::{estimate_file, ReadingOptions};
///
/// let estimate = estimate_file("posts/hello.md", &ReadingOptions::default()).unwrap();
/// println!("{}", estimate);
/// ```
pub fn estimate_file<P: AsRef<Path>>(path: P, options: &ReadingOptions) -> Result<ReadingEstimate> {
    let content = std::fs::read_to_string(path)?;
    Ok(ReadingTimeEstimator::new(options.clone()).estimate(&content))
}

/// Load a post from a file, taking its id from the file stem and its
/// timestamps from YAML frontmatter.
pub fn load_post<P: AsRef<Path>>(path: P) -> Result<Post> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Post::from_markdown(id, content))
}

/// Analyze a single post file.
pub fn analyze_file<P: AsRef<Path>>(path: P, options: &ReadingOptions) -> Result<PostSummary> {
    let post = load_post(path)?;
    BatchAnalyzer::new(options.clone(), FreshnessOptions::default()).analyze(&post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_estimate_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.html");
        fs::write(&path, format!("<article>{}</article>", vec!["word"; 450].join(" "))).unwrap();

        let estimate = estimate_file(&path, &ReadingOptions::default()).unwrap();
        assert_eq!(estimate.words, 450);
        assert_eq!(estimate.minutes, 3);
    }

    #[test]
    fn test_estimate_missing_file() {
        let result = estimate_file("/nonexistent/post.md", &ReadingOptions::default());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_post_uses_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my-first-post.md");
        fs::write(&path, "---\ndate: 2024-01-01\n---\nHello there").unwrap();

        let post = load_post(&path).unwrap();
        assert_eq!(post.id, "my-first-post");
        assert_eq!(post.published_at.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_analyze_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        fs::write(
            &path,
            "---\npublished: 2024-01-01\nupdated: 2024-01-01\n---\nHello there",
        )
        .unwrap();

        let options = ReadingOptions::new().with_frontmatter_skipped(true);
        let summary = analyze_file(&path, &options).unwrap();
        assert_eq!(summary.reading.words, 2);
        assert!(!summary.freshness.unwrap().is_updated);
    }
}
