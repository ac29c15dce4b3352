use std::ops::RangeInclusive;

/// Script blocks whose characters always count as word-forming, on top of
/// generic alphanumerics and `_`.
pub const WORD_SCRIPT_RANGES: [RangeInclusive<char>; 1] = ['\u{0600}'..='\u{06FF}'];

pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || WORD_SCRIPT_RANGES.iter().any(|range| range.contains(&ch))
}

/// Splits normalized text into word tokens, dropping empty pieces left by
/// leading, trailing or adjacent delimiters.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|ch: char| !is_word_char(ch))
        .filter(|token| !token.is_empty())
        .collect()
}

pub fn word_count(text: &str) -> usize {
    tokenize(text).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert_eq!(word_count(""), 0);
        assert!(tokenize(" ,.; ").is_empty());
    }

    #[test]
    fn splits_on_spaces_and_punctuation() {
        let tokens = tokenize("hello, world! foo_bar 42");
        assert_eq!(tokens, vec!["hello", "world", "foo_bar", "42"]);
    }

    #[test]
    fn persian_punctuation_stays_inside_tokens() {
        // U+060C (Arabic comma) lives in the Arabic block, so it is word-forming.
        let tokens = tokenize("سلام، دنیا");
        assert_eq!(tokens, vec!["سلام،", "دنیا"]);
    }

    #[test]
    fn persian_words_with_latin_punctuation() {
        let tokens = tokenize("سلام دنیا سلام.");
        assert_eq!(tokens, vec!["سلام", "دنیا", "سلام"]);
        assert_eq!(word_count("سلام دنیا سلام."), 3);
    }

    #[test]
    fn count_matches_token_length() {
        let text = "one - two -- three";
        assert_eq!(word_count(text), tokenize(text).len());
    }
}
