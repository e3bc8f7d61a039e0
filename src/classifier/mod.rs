//! Rule-based tense classifier.
//!
//! The classifier scores a sentence against three fixed keyword tables
//! (present, past, future) and picks the category with the highest
//! weighted score. Matching is membership-based per distinct pattern: a
//! single-word pattern found anywhere in the token stream adds 2, a
//! two-word pattern found among the bigrams adds 3, and a pattern that
//! occurs several times in the sentence still counts once. There is no
//! trained model behind this; it is a deterministic rule engine.
//!
//! # Example
//!
//! ```
//! use tempora::classifier::TenseClassifier;
//!
//! let classifier = TenseClassifier::new();
//! let prediction = classifier.classify("They discovered a new species");
//!
//! assert_eq!(prediction.tense, "Past Tense");
//! assert_eq!(prediction.prediction, 2);
//! ```

pub mod patterns;
pub mod types;

// Re-export commonly used types
pub use patterns::{PATTERN_TABLES, PatternTable};
pub use types::{Prediction, Tense};

use std::collections::HashSet;

use crate::analysis::{AnalyzedText, analyze};

/// Score added for each matching single-word pattern.
const UNIGRAM_WEIGHT: u32 = 2;

/// Score added for each matching two-word pattern. Bigrams carry more
/// signal than isolated words, so they weigh more.
const BIGRAM_WEIGHT: u32 = 3;

/// Confidence reported when no pattern in any table matched.
const NO_MATCH_CONFIDENCE: f64 = 0.33;

/// Weighted match scores for the three categories.
///
/// A fresh vector is built for every classification call; scores never
/// survive across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    /// Present-table score.
    pub present: u32,
    /// Past-table score.
    pub past: u32,
    /// Future-table score.
    pub future: u32,
}

impl Scores {
    /// Score of the given category.
    pub fn get(&self, tense: Tense) -> u32 {
        match tense {
            Tense::Present => self.present,
            Tense::Past => self.past,
            Tense::Future => self.future,
        }
    }

    /// Sum of all three scores.
    pub fn total(&self) -> u32 {
        self.present + self.past + self.future
    }

    /// Resolve the winning category.
    ///
    /// When nothing matched at all, Present is the default. Ties resolve
    /// in the fixed order Present, then Past, then Future; this ordering
    /// is part of the observable contract and is pinned by tests.
    pub fn winner(&self) -> Tense {
        let max_score = self.present.max(self.past).max(self.future);

        if max_score == 0 {
            // Default to present if no strong indicators
            return Tense::Present;
        }

        if self.present == max_score {
            Tense::Present
        } else if self.past == max_score {
            Tense::Past
        } else {
            Tense::Future
        }
    }
}

/// Rule-based classifier over the fixed pattern tables.
///
/// Stateless per call: classification reads only the shared immutable
/// tables and allocates its own transient score vector, so a single
/// instance may be used from any number of threads without coordination.
#[derive(Debug, Clone, Copy)]
pub struct TenseClassifier {
    tables: &'static [PatternTable; 3],
}

impl TenseClassifier {
    /// Create a classifier over the built-in pattern tables.
    pub fn new() -> Self {
        TenseClassifier {
            tables: &PATTERN_TABLES,
        }
    }

    /// Classify a sentence into one of the three tense categories.
    ///
    /// Accepts any string, including empty input, and always produces a
    /// result: with zero matches the prediction falls back to Present
    /// with a fixed confidence of 0.33. Otherwise confidence is the
    /// winning score divided by the sum of all three scores.
    pub fn classify(&self, text: &str) -> Prediction {
        let analyzed = analyze(text);
        let scores = self.score(&analyzed);

        let winner = scores.winner();
        let total = scores.total();
        let confidence = if total == 0 {
            NO_MATCH_CONFIDENCE
        } else {
            f64::from(scores.get(winner)) / f64::from(total)
        };

        Prediction::new(winner, confidence)
    }

    /// Score analyzed text against all three tables.
    pub fn score(&self, analyzed: &AnalyzedText) -> Scores {
        let tokens: HashSet<&str> = analyzed.tokens.iter().map(String::as_str).collect();
        let bigrams: HashSet<&str> = analyzed.bigrams.iter().map(String::as_str).collect();

        let mut scores = Scores::default();
        for table in self.tables {
            let score = score_table(&tokens, &bigrams, table);
            match table.tense {
                Tense::Present => scores.present = score,
                Tense::Past => scores.past = score,
                Tense::Future => scores.future = score,
            }
        }
        scores
    }
}

impl Default for TenseClassifier {
    fn default() -> Self {
        TenseClassifier::new()
    }
}

/// Accumulate the weighted score of one table against a sentence.
///
/// Each distinct matching pattern contributes its weight exactly once,
/// regardless of how many times it occurs in the sentence.
fn score_table(tokens: &HashSet<&str>, bigrams: &HashSet<&str>, table: &PatternTable) -> u32 {
    let mut score = 0;

    for pattern in &table.unigrams {
        if tokens.contains(pattern) {
            score += UNIGRAM_WEIGHT;
        }
    }

    for pattern in &table.bigrams {
        if bigrams.contains(pattern) {
            score += BIGRAM_WEIGHT;
        }
    }

    score
}
