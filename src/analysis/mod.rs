//! Text analysis module for Tempora.
//!
//! The classifier consumes sentences through a fixed pipeline: normalize
//! the raw text, split it into whitespace tokens, and derive adjacent
//! bigrams. Everything produced here is transient and recomputed per
//! call; nothing is cached between classifications.

pub mod normalizer;
pub mod tokenizer;

// Re-export commonly used functions
pub use normalizer::normalize;
pub use tokenizer::{bigrams, tokenize};

/// The per-call analysis artifacts a sentence is reduced to.
///
/// Both fields derive from the normalized form of the input and exist
/// only for the duration of one classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedText {
    /// Whitespace-delimited tokens of the normalized sentence.
    pub tokens: Vec<String>,
    /// Adjacent token pairs joined by a single space.
    pub bigrams: Vec<String>,
}

/// Run the full analysis pipeline over raw sentence text.
pub fn analyze(text: &str) -> AnalyzedText {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized);
    let bigrams = bigrams(&tokens);
    AnalyzedText { tokens, bigrams }
}
