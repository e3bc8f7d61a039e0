//! Command implementations for the Tempora CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use serde::Deserialize;

use crate::classifier::TenseClassifier;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, TemporaError};

/// One input record in a batch file.
#[derive(Debug, Deserialize)]
struct SentenceRecord {
    sentence: String,
}

/// Execute a CLI command.
pub fn execute_command(args: TemporaArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_sentence(classify_args.clone(), &args),
        Command::Batch(batch_args) => classify_batch(batch_args.clone(), &args),
    }
}

/// Classify a single sentence.
fn classify_sentence(args: ClassifyArgs, cli_args: &TemporaArgs) -> Result<()> {
    let classifier = TenseClassifier::new();
    let prediction = classifier.classify(&args.sentence);

    if cli_args.verbosity() > 1 {
        let scores = classifier.score(&crate::analysis::analyze(&args.sentence));
        println!(
            "Scores - Present: {}, Past: {}, Future: {}",
            scores.present, scores.past, scores.future
        );
    }

    output_result(&prediction, cli_args)
}

/// Classify sentences from a JSONL file.
fn classify_batch(args: BatchArgs, cli_args: &TemporaArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Reading sentences from: {}", args.input_file.display());
    }

    let start_time = Instant::now();
    let classifier = TenseClassifier::new();

    let file = File::open(&args.input_file)?;
    let reader = BufReader::new(file);

    let mut predictions = Vec::new();
    let mut lines_skipped = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<SentenceRecord>(&line) {
            Ok(record) => {
                let prediction = classifier.classify(&record.sentence);
                predictions.push(BatchPrediction {
                    sentence: record.sentence,
                    prediction,
                });
            }
            Err(e) => {
                if args.strict {
                    return Err(TemporaError::invalid_operation(format!(
                        "malformed record on line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
                lines_skipped += 1;
                if cli_args.verbosity() > 0 {
                    eprintln!("Error parsing record on line {}: {}", line_num + 1, e);
                }
            }
        }
    }

    let duration = start_time.elapsed();
    let lines_classified = predictions.len();

    output_result(
        &BatchResults {
            predictions,
            lines_classified,
            lines_skipped,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}
