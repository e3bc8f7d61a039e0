//! Common types for tense classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical tense category.
///
/// The three mutually exclusive classification outcomes, each with a
/// stable numeric code and display label that form part of the external
/// result contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    /// Present tense (code 1).
    Present,
    /// Past tense (code 2).
    Past,
    /// Future tense (code 3).
    Future,
}

impl Tense {
    /// All categories in tie-break precedence order.
    pub const ALL: [Tense; 3] = [Tense::Present, Tense::Past, Tense::Future];

    /// Numeric code exposed in prediction results.
    pub fn code(&self) -> u8 {
        match self {
            Tense::Present => 1,
            Tense::Past => 2,
            Tense::Future => 3,
        }
    }

    /// Display label exposed in prediction results.
    pub fn label(&self) -> &'static str {
        match self {
            Tense::Present => "Present Tense",
            Tense::Past => "Past Tense",
            Tense::Future => "Future Tense",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying one sentence.
///
/// Field names match the JSON contract consumed by callers: `tense` is
/// the display label, `prediction` the numeric code (1, 2, or 3), and
/// `confidence` a value in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Display label of the chosen category.
    pub tense: String,
    /// Numeric code of the chosen category.
    pub prediction: u8,
    /// Chosen category's share of the total score, or 0.33 when nothing
    /// matched.
    pub confidence: f64,
}

impl Prediction {
    /// Build a prediction from a category and its confidence.
    pub fn new(tense: Tense, confidence: f64) -> Self {
        Prediction {
            tense: tense.label().to_string(),
            prediction: tense.code(),
            confidence,
        }
    }
}
