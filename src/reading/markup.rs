//! Markup stripping and word tokenization.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Angle-bracket delimited spans such as `<p>`, `</em>` or `<img src="x">`.
const TAG_PATTERN: &str = r"<[^>]*>";

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(TAG_PATTERN).unwrap())
}

/// Remove every markup tag from `content`.
///
/// Tags are replaced with a single space so that `one<br>two` still counts
/// as two words. Content without tags is returned borrowed.
pub fn strip_markup(content: &str) -> Cow<'_, str> {
    tag_regex().replace_all(content, " ")
}

/// Count whitespace-separated words after stripping markup.
pub fn count_words(content: &str) -> usize {
    strip_markup(content).split_whitespace().count()
}

/// Split a leading YAML frontmatter block from the body.
///
/// Returns `(frontmatter, body)` when the content starts with `---\n` and a
/// closing `\n---\n` follows.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let stripped = content.strip_prefix("---\n")?;
    let end_pos = stripped.find("\n---\n")?;
    let fm_end = 4 + end_pos + 5;
    Some((&content[..fm_end], &content[fm_end..]))
}
