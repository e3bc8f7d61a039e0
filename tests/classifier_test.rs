//! Integration tests for the tense classification engine.

use tempora::prelude::*;

#[test]
fn test_classification_is_deterministic() {
    let classifier = TenseClassifier::new();
    let inputs = [
        "She sings beautifully",
        "They discovered a new species",
        "We will finish this project by tomorrow",
        "",
        "The quick brown fox",
    ];

    for input in inputs {
        let first = classifier.classify(input);
        let second = classifier.classify(input);
        assert_eq!(first, second, "classify must be pure for {input:?}");
    }
}

#[test]
fn test_default_fallback_to_present() {
    let classifier = TenseClassifier::new();

    for input in ["", "   ", "zqx jvw klm"] {
        let prediction = classifier.classify(input);
        assert_eq!(prediction.tense, "Present Tense");
        assert_eq!(prediction.prediction, 1);
        assert_eq!(prediction.confidence, 0.33);
    }
}

#[test]
fn test_single_word_match_full_confidence() {
    // "sings" is the only pattern in the sentence, present table only.
    let prediction = TenseClassifier::new().classify("She sings beautifully");
    assert_eq!(prediction.tense, "Present Tense");
    assert_eq!(prediction.prediction, 1);
    assert_eq!(prediction.confidence, 1.0);
}

#[test]
fn test_bigram_outweighs_unigram() {
    // "went" scores past +2; the bigram "going to" scores future +3.
    let prediction = TenseClassifier::new().classify("went going to");
    assert_eq!(prediction.tense, "Future Tense");
    assert_eq!(prediction.prediction, 3);
    assert_eq!(prediction.confidence, 0.6);
}

#[test]
fn test_three_way_tie_resolves_to_present() {
    // One single-word pattern from each table, each worth 2.
    let prediction = TenseClassifier::new().classify("is went will");
    assert_eq!(prediction.tense, "Present Tense");
    assert_eq!(prediction.prediction, 1);
}

#[test]
fn test_past_beats_future_on_tie_without_present() {
    let prediction = TenseClassifier::new().classify("went will");
    assert_eq!(prediction.tense, "Past Tense");
    assert_eq!(prediction.prediction, 2);
    assert_eq!(prediction.confidence, 0.5);
}

#[test]
fn test_case_and_punctuation_insensitive() {
    let classifier = TenseClassifier::new();
    let shouty = classifier.classify("She WILL travel, tomorrow!");
    let plain = classifier.classify("she will travel tomorrow");
    assert_eq!(shouty, plain);
}

#[test]
fn test_end_to_end_examples() {
    let classifier = TenseClassifier::new();

    let prediction = classifier.classify("She sings beautifully");
    assert_eq!(prediction.tense, "Present Tense");
    assert_eq!(prediction.confidence, 1.0);

    let prediction = classifier.classify("They discovered a new species");
    assert_eq!(prediction.tense, "Past Tense");
    assert_eq!(prediction.confidence, 1.0);

    // "will" and "tomorrow" both match the future table.
    let prediction = classifier.classify("We will finish this project by tomorrow");
    assert_eq!(prediction.tense, "Future Tense");
    assert_eq!(prediction.confidence, 1.0);
}

#[test]
fn test_prediction_json_contract() -> Result<()> {
    let prediction = TenseClassifier::new().classify("They discovered a new species");
    let json = serde_json::to_value(&prediction)?;

    assert_eq!(json["tense"], "Past Tense");
    assert_eq!(json["prediction"], 2);
    assert_eq!(json["confidence"], 1.0);
    Ok(())
}

#[test]
fn test_codes_match_labels() {
    let classifier = TenseClassifier::new();
    let cases = [
        ("she is here now", "Present Tense", 1),
        ("he was there yesterday", "Past Tense", 2),
        ("it will happen soon", "Future Tense", 3),
    ];

    for (input, label, code) in cases {
        let prediction = classifier.classify(input);
        assert_eq!(prediction.tense, label, "input: {input:?}");
        assert_eq!(prediction.prediction, code, "input: {input:?}");
    }
}
