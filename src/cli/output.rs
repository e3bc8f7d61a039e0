//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TemporaArgs};
use crate::classifier::Prediction;
use crate::error::Result;

/// Result structure for batch classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResults {
    /// Per-sentence predictions, in input order.
    pub predictions: Vec<BatchPrediction>,
    /// Lines classified successfully.
    pub lines_classified: usize,
    /// Lines skipped because they failed to parse.
    pub lines_skipped: usize,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
}

/// One classified sentence from a batch run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchPrediction {
    /// Input sentence as read from the file.
    pub sentence: String,
    /// Classification result.
    #[serde(flatten)]
    pub prediction: Prediction,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(result: &T, args: &TemporaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(result: &T, args: &TemporaArgs) -> Result<()> {
    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("BatchResults") => {
            output_batch_results_human(&value, args)
        }
        _ => output_prediction_human(&value, args),
    }
}

/// Output a single prediction in human format.
fn output_prediction_human(value: &serde_json::Value, _args: &TemporaArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(tense) = obj.get("tense").and_then(|t| t.as_str()) {
            println!("Tense: {tense}");
        }
        if let Some(confidence) = obj.get("confidence").and_then(|c| c.as_f64()) {
            println!("Confidence: {:.1}%", confidence * 100.0);
        }
    }
    Ok(())
}

/// Output batch results in human format.
fn output_batch_results_human(value: &serde_json::Value, args: &TemporaArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Batch Results:");
        println!("══════════════");

        if let Some(predictions) = obj.get("predictions").and_then(|p| p.as_array()) {
            for prediction in predictions {
                let sentence = prediction
                    .get("sentence")
                    .and_then(|s| s.as_str())
                    .unwrap_or("");
                let tense = prediction
                    .get("tense")
                    .and_then(|t| t.as_str())
                    .unwrap_or("unknown");
                let confidence = prediction
                    .get("confidence")
                    .and_then(|c| c.as_f64())
                    .unwrap_or(0.0);
                println!("{sentence}: {tense} ({:.1}%)", confidence * 100.0);
            }
        }

        println!();

        if let Some(classified) = obj.get("lines_classified").and_then(|c| c.as_u64()) {
            println!("Classified: {classified}");
        }
        if let Some(skipped) = obj.get("lines_skipped").and_then(|s| s.as_u64())
            && skipped > 0
        {
            println!("Skipped: {skipped}");
        }
        if args.verbosity() > 1
            && let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64())
        {
            println!("Duration: {duration}ms");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TemporaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Tense;

    #[test]
    fn test_batch_prediction_flattens_fields() {
        let entry = BatchPrediction {
            sentence: "she sings".to_string(),
            prediction: Prediction::new(Tense::Present, 1.0),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["sentence"], "she sings");
        assert_eq!(json["tense"], "Present Tense");
        assert_eq!(json["prediction"], 1);
        assert_eq!(json["confidence"], 1.0);
    }
}
