//! Text normalization for tense classification.
//!
//! Pattern matching is case- and punctuation-insensitive, so every input
//! sentence passes through [`normalize`] before tokenization: lowercase,
//! strip every character that is not a word character or whitespace, and
//! trim the ends.
//!
//! # Examples
//!
//! ```
//! use tempora::analysis::normalize;
//!
//! assert_eq!(normalize("She WILL travel, tomorrow!"), "she will travel tomorrow");
//! assert_eq!(normalize("   "), "");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Matches every character that is neither a word character nor whitespace.
static NON_WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex literal"));

/// Normalize raw sentence text for pattern matching.
///
/// Lowercases, removes punctuation and symbols, and trims surrounding
/// whitespace. Empty or whitespace-only input normalizes to an empty
/// string. Pure function with no failure path.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_WORD_CHARS.replace_all(&lowered, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("She SINGS Beautifully"), "she sings beautifully");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(
            normalize("Wait -- will they arrive, tomorrow?!"),
            "wait  will they arrive tomorrow"
        );
    }

    #[test]
    fn test_normalize_keeps_digits_and_underscore() {
        assert_eq!(normalize("took 3 weeks_ago"), "took 3 weeks_ago");
    }

    #[test]
    fn test_normalize_empty_and_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\t\n"), "");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  hello world  "), "hello world");
    }
}
