//! Integration tests for the classify command.

use clap::Parser;

use tempora::cli::args::{Command, OutputFormat, TemporaArgs};
use tempora::cli::commands::execute_command;

#[test]
fn test_classify_command_runs() {
    let args = TemporaArgs::parse_from(["tempora", "-q", "classify", "She sings beautifully"]);
    execute_command(args).unwrap();
}

#[test]
fn test_classify_accepts_empty_sentence() {
    // Presence is enforced by clap; an empty string is still valid input
    // and classifies to the Present fallback.
    let args = TemporaArgs::parse_from(["tempora", "-q", "classify", ""]);
    execute_command(args).unwrap();
}

#[test]
fn test_format_flag_parses() {
    let args = TemporaArgs::parse_from(["tempora", "-f", "json", "--pretty", "classify", "x"]);
    assert!(matches!(args.output_format, OutputFormat::Json));
    assert!(args.pretty);
    assert!(matches!(args.command, Command::Classify(_)));
}
