use crate::error::{AnalyzeError, Result};
use regex::Regex;

/// Accepts any amount of whitespace or zero-width joiners between words.
pub const FLEXIBLE_SEPARATOR: &str = r"[\s\x{200C}\x{200D}]*";

#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    phrase: String,
    regex: Regex,
}

impl PhraseMatcher {
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Compiles a normalized phrase into a matcher that tolerates variable
/// spacing between its words but not reordering or inserted words.
///
/// Each word is escaped, so regex metacharacters in the phrase match
/// literally. A phrase with no words is rejected with
/// [`AnalyzeError::EmptyPhrase`].
pub fn build_pattern(phrase: &str) -> Result<PhraseMatcher> {
    let words = phrase.split_whitespace().collect::<Vec<_>>();
    if words.is_empty() {
        return Err(AnalyzeError::EmptyPhrase);
    }

    let pattern = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join(FLEXIBLE_SEPARATOR);

    Ok(PhraseMatcher {
        phrase: words.join(" "),
        regex: Regex::new(&pattern)?,
    })
}

/// Number of non-overlapping matches, scanning left to right.
pub fn count_occurrences(matcher: &PhraseMatcher, text: &str) -> usize {
    matcher.regex.find_iter(text).count()
}
