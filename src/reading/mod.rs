//! Reading time estimation for text and markup content.

mod estimator;
mod markup;
mod options;

pub use estimator::{estimate, estimate_with_speed, format, ReadingEstimate, ReadingTimeEstimator};
pub use markup::{count_words, split_frontmatter, strip_markup};
pub use options::{ReadingOptions, ReadingSpeed, DEFAULT_WORDS_PER_MINUTE};
