//! Whitespace tokenization and bigram construction.

/// Split normalized text on runs of whitespace.
///
/// Expects input that has already been through
/// [`normalize`](crate::analysis::normalize); the tokens are used for
/// single-word pattern matching and as the source of bigrams.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}

/// Build adjacent token pairs joined by a single space.
///
/// Two-word patterns match against these. Fewer than two tokens yields an
/// empty vector.
pub fn bigrams(tokens: &[String]) -> Vec<String> {
    tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}
