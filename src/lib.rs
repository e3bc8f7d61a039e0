//! # Tempora
//!
//! A rule-based grammatical tense classifier for English sentences.
//!
//! ## Features
//!
//! - Pure Rust implementation, no trained model or external data files
//! - Deterministic keyword/bigram scoring over fixed pattern tables
//! - Case- and punctuation-insensitive analysis pipeline
//! - Stateless per call, safe to share across threads
//!
//! ## Example
//!
//! ```
//! use tempora::classifier::TenseClassifier;
//!
//! let classifier = TenseClassifier::new();
//! let prediction = classifier.classify("We will finish this project by tomorrow");
//!
//! assert_eq!(prediction.tense, "Future Tense");
//! assert_eq!(prediction.prediction, 3);
//! assert_eq!(prediction.confidence, 1.0);
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::classifier::{Prediction, Tense, TenseClassifier};
    pub use crate::error::{Result, TemporaError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
