//! Reading time options and configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Default reading speed in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

const DEFAULT_SPEED: NonZeroU32 = match NonZeroU32::new(DEFAULT_WORDS_PER_MINUTE) {
    Some(speed) => speed,
    None => panic!("default reading speed must be non-zero"),
};

/// Reading speed in words per minute. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ReadingSpeed(NonZeroU32);

impl ReadingSpeed {
    /// Create a reading speed, rejecting zero.
    pub fn new(words_per_minute: u32) -> Result<Self> {
        NonZeroU32::new(words_per_minute)
            .map(Self)
            .ok_or(Error::InvalidReadingSpeed(words_per_minute))
    }

    /// Words per minute.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for ReadingSpeed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

impl TryFrom<u32> for ReadingSpeed {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ReadingSpeed> for u32 {
    fn from(speed: ReadingSpeed) -> Self {
        speed.get()
    }
}

impl std::fmt::Display for ReadingSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wpm", self.get())
    }
}

/// Options for estimating reading time.
#[derive(Debug, Clone, Default)]
pub struct ReadingOptions {
    /// Assumed reading speed
    pub speed: ReadingSpeed,

    /// Exclude a leading YAML frontmatter block from the word count
    pub skip_frontmatter: bool,

    /// Normalize Unicode to NFC before counting
    pub normalize_unicode: bool,
}

impl ReadingOptions {
    /// Create new reading options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reading speed.
    pub fn with_speed(mut self, speed: ReadingSpeed) -> Self {
        self.speed = speed;
        self
    }

    /// Set the reading speed from a raw words-per-minute value.
    pub fn with_words_per_minute(self, words_per_minute: u32) -> Result<Self> {
        Ok(self.with_speed(ReadingSpeed::new(words_per_minute)?))
    }

    /// Enable or disable frontmatter skipping.
    pub fn with_frontmatter_skipped(mut self, skip: bool) -> Self {
        self.skip_frontmatter = skip;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}
