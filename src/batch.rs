//! Parallel analysis of many posts.

use crate::error::Result;
use crate::freshness::{Freshness, FreshnessFormatter, FreshnessOptions};
use crate::reading::{split_frontmatter, ReadingEstimate, ReadingOptions, ReadingTimeEstimator};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const PUBLISHED_KEYS: &[&str] = &["published", "publishedAt", "published_at", "date"];
const UPDATED_KEYS: &[&str] = &["updated", "updatedAt", "updated_at", "lastmod"];

/// A post to analyze.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Identifier (slug or file name)
    pub id: String,

    /// Raw content, possibly with markup and frontmatter
    pub content: String,

    /// Publish timestamp
    pub published_at: Option<String>,

    /// Last update timestamp
    pub updated_at: Option<String>,
}

impl Post {
    /// Create a post without timestamps.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Create a post, reading timestamps from YAML frontmatter if present.
    ///
    /// Recognizes `published`/`date` and `updated`/`lastmod` style keys.
    pub fn from_markdown(id: impl Into<String>, content: impl Into<String>) -> Self {
        let mut post = Self::new(id, content);
        if let Some((frontmatter, _)) = split_frontmatter(&post.content) {
            post.published_at = frontmatter_value(frontmatter, PUBLISHED_KEYS);
            post.updated_at = frontmatter_value(frontmatter, UPDATED_KEYS);
        }
        post
    }

    /// Set the publish timestamp.
    pub fn with_published(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    /// Set the update timestamp.
    pub fn with_updated(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }
}

fn frontmatter_value(frontmatter: &str, keys: &[&str]) -> Option<String> {
    frontmatter.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if !keys.contains(&key.trim()) {
            return None;
        }
        let value = value.trim().trim_matches(|c: char| c == '"' || c == '\'');
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Result of analyzing one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Post identifier
    pub id: String,

    /// Reading time
    pub reading: ReadingEstimate,

    /// Freshness, when the post has a publish timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freshness: Option<Freshness>,
}

/// Analyzes posts in parallel.
#[derive(Debug, Clone, Default)]
pub struct BatchAnalyzer {
    estimator: ReadingTimeEstimator,
    formatter: FreshnessFormatter,
}

impl BatchAnalyzer {
    /// Create an analyzer.
    pub fn new(reading: ReadingOptions, freshness: FreshnessOptions) -> Self {
        Self {
            estimator: ReadingTimeEstimator::new(reading),
            formatter: FreshnessFormatter::new(freshness),
        }
    }

    /// Analyze a single post.
    pub fn analyze(&self, post: &Post) -> Result<PostSummary> {
        let freshness = post
            .published_at
            .as_deref()
            .map(|published| self.formatter.describe(published, post.updated_at.as_deref()))
            .transpose()?;

        Ok(PostSummary {
            id: post.id.clone(),
            reading: self.estimator.estimate(&post.content),
            freshness,
        })
    }

    /// Analyze every post. Output order matches input order.
    ///
    /// Fails on the first post whose timestamps cannot be parsed.
    pub fn analyze_all(&self, posts: &[Post]) -> Result<Vec<PostSummary>> {
        log::debug!("analyzing {} posts", posts.len());
        posts.par_iter().map(|post| self.analyze(post)).collect()
    }
}

/// Analyze posts with the given reading options and default freshness options.
pub fn analyze_posts(posts: &[Post], options: &ReadingOptions) -> Result<Vec<PostSummary>> {
    BatchAnalyzer::new(options.clone(), FreshnessOptions::default()).analyze_all(posts)
}
