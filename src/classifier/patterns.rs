//! Fixed keyword tables for the three tense categories.
//!
//! Each table is an ordered list of lowercase one- or two-word patterns.
//! The lists are immutable process-wide configuration: they are compiled
//! into per-category [`PatternTable`]s once, at first use, and never
//! mutated. A handful of entries are longer than two tokens; they are
//! kept for fidelity with the curated word lists but can never match,
//! since matching only considers tokens and bigrams.

use std::sync::LazyLock;

use super::types::Tense;

/// Present-tense indicators: auxiliaries, continuous/perfect forms,
/// frequency adverbs, and base/third-person verb pairs.
pub const PRESENT_PATTERNS: &[&str] = &[
    // Simple present
    "is",
    "are",
    "am",
    "do",
    "does",
    "have",
    "has",
    // Present continuous
    "is reading",
    "are playing",
    "am working",
    "is studying",
    // Present perfect
    "have been",
    "has been",
    "have made",
    "has made",
    "have created",
    "has created",
    // Tense indicators
    "currently",
    "now",
    "at the moment",
    "always",
    "usually",
    "often",
    "sometimes",
    "never",
    "every day",
    "every week",
    "help",
    "helps",
    "assist",
    "assists",
    "work",
    "works",
    "play",
    "plays",
    "sing",
    "sings",
    "develop",
    "develops",
    "promote",
    "promotes",
    "research",
    "researches",
    "study",
    "studies",
];

/// Past-tense indicators: irregular and regular past forms,
/// past-continuous/perfect phrases, and past time markers.
pub const PAST_PATTERNS: &[&str] = &[
    // Simple past
    "was",
    "were",
    "did",
    "had",
    "went",
    "came",
    "made",
    "took",
    "said",
    "told",
    "got",
    "found",
    "left",
    "started",
    "stopped",
    // Specific past tense verbs
    "discovered",
    "created",
    "built",
    "served",
    "caught",
    "bent",
    "repaired",
    "charged",
    "studied",
    "drank",
    "smashed",
    "cooked",
    "attended",
    "slept",
    "practiced",
    "detected",
    "lost",
    "browsed",
    "celebrated",
    "thanked",
    "organized",
    "enjoyed",
    "discussed",
    "competed",
    "lounged",
    "hung",
    // Past continuous
    "was conducting",
    "was sleeping",
    "were sleeping",
    "were browsing",
    "were analyzing",
    "were discussing",
    "had been",
    // Time indicators
    "ago",
    "yesterday",
    "last week",
    "last month",
    "last year",
    "previously",
    "before",
    "earlier",
];

/// Future-tense indicators: modal and periphrastic markers, curated
/// "will + verb" phrases, and future time markers.
pub const FUTURE_PATTERNS: &[&str] = &[
    // Will + verb
    "will",
    "will be",
    "will have",
    "will have been",
    "will be evolving",
    "will be assisting",
    "will be experimenting",
    "will guide",
    "will enhance",
    "will adjust",
    "will encourage",
    "will collaborate",
    "will become",
    "will integrate",
    "will simulate",
    "will connect",
    "will provide",
    "will assist",
    // Going to
    "going to",
    "gonna",
    // Shall
    "shall",
    // Time indicators
    "tomorrow",
    "next week",
    "next month",
    "next year",
    "in the future",
    "by next",
    "by the end of",
    "in a month",
    "over the next",
    "soon",
    "later",
    // Future perfect
    "will have been",
    "will have designed",
    "will have created",
    "will have established",
    "will have been preparing",
];

/// A tense category's patterns split by matchable length.
///
/// Unigrams match against the token stream, bigrams against adjacent
/// token pairs. Longer patterns are discarded here since nothing can
/// ever match them.
#[derive(Debug)]
pub struct PatternTable {
    /// Category this table scores for.
    pub tense: Tense,
    /// Single-word patterns.
    pub unigrams: Vec<&'static str>,
    /// Exact two-word phrases.
    pub bigrams: Vec<&'static str>,
}

impl PatternTable {
    fn new(tense: Tense, patterns: &[&'static str]) -> Self {
        let mut unigrams = Vec::new();
        let mut bigrams = Vec::new();
        for pattern in patterns {
            match pattern.split_whitespace().count() {
                1 => unigrams.push(*pattern),
                2 => bigrams.push(*pattern),
                _ => {}
            }
        }
        PatternTable {
            tense,
            unigrams,
            bigrams,
        }
    }
}

/// The three pattern tables, in tie-break precedence order.
pub static PATTERN_TABLES: LazyLock<[PatternTable; 3]> = LazyLock::new(|| {
    [
        PatternTable::new(Tense::Present, PRESENT_PATTERNS),
        PatternTable::new(Tense::Past, PAST_PATTERNS),
        PatternTable::new(Tense::Future, FUTURE_PATTERNS),
    ]
});
