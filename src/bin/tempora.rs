//! Tempora CLI binary.

use clap::Parser;
use std::process;
use tempora::cli::{args::*, commands::*};

fn main() {
    // Parse command line arguments using clap
    let args = TemporaArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
