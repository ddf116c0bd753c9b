//! Caption normalization into filesystem-safe base slugs.

use std::collections::HashSet;

/// Connective words dropped from slugs to keep them short and dense.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "the", "with", "and", "on", "in", "of", "at", "to", "by", "for", "from",
];

/// Slug used when a caption has no usable tokens.
pub const DEFAULT_SLUG: &str = "graphic";

/// Normalization policy: stopword set, fallback slug, optional length cap.
///
/// The stopword set is injected here rather than read from global state so
/// tests and callers can substitute alternates. Built once per batch.
#[derive(Debug, Clone)]
pub struct SlugPolicy {
    stopwords: HashSet<String>,
    default_slug: String,
    max_len: Option<usize>,
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().copied(), DEFAULT_SLUG, None)
    }
}

impl SlugPolicy {
    pub fn new<I, S>(stopwords: I, default_slug: &str, max_len: Option<usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            default_slug: default_slug.to_string(),
            max_len,
        }
    }

    /// Derives the base slug for `caption`.
    ///
    /// Lowercases, tokenizes on word characters (letters, digits,
    /// underscore), drops stopwords, and joins the survivors with `_`.
    /// Total over all inputs: an empty or all-stopword caption yields the
    /// default slug, so the result is never empty.
    pub fn normalize(&self, caption: &str) -> String {
        let lowered = caption.to_lowercase();
        let joined = lowered
            .split(|c: char| !is_word_char(c))
            .filter(|t| !t.is_empty() && !self.stopwords.contains(*t))
            .collect::<Vec<_>>()
            .join("_");

        let mut slug = if joined.is_empty() {
            self.default_slug.clone()
        } else {
            joined
        };

        if let Some(max) = self.max_len {
            let capped: String = slug.chars().take(max).collect();
            // The cut can land inside a joined token and leave a trailing
            // separator; strip it. A cap small enough to empty the slug is
            // ignored rather than break the non-empty guarantee.
            let capped = capped.trim_end_matches('_');
            if !capped.is_empty() && capped.len() < slug.len() {
                slug = capped.to_string();
            }
        }

        slug
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
