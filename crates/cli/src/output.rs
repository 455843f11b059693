//! Human and JSON rendering of guess results.

use std::io::{self, Write};

use colored::Colorize;
use dateguess_core::{FormatGuess, GuessError, Notation};
use serde_json::{json, Value};

/// How results are printed.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub notation: Notation,
    pub json: bool,
}

/// JSON record for one input.
pub fn json_record(input: &str, notation: Notation, result: &Result<FormatGuess, GuessError>) -> Value {
    match result {
        Ok(guess) => json!({
            "input": input,
            "notation": notation,
            "result": guess,
        }),
        Err(e) => json!({
            "input": input,
            "error": e.to_string(),
        }),
    }
}

/// Print the result for a single command-line input.
///
/// Formats go to `out`, one per line. Errors go to `err` unless JSON output
/// is on, in which case they are part of the record.
pub fn print_result(
    out: &mut impl Write,
    err: &mut impl Write,
    input: &str,
    result: &Result<FormatGuess, GuessError>,
    config: &OutputConfig,
) -> io::Result<()> {
    if config.json {
        return writeln!(out, "{}", json_record(input, config.notation, result));
    }

    match result {
        Ok(guess) => {
            if guess.is_ambiguous() {
                tracing::debug!("{} candidate formats", guess.len());
            }
            for format in guess.formats() {
                writeln!(out, "{}", format.green())?;
            }
        }
        Err(e) => writeln!(err, "{}: {}", "error".red().bold(), e)?,
    }
    Ok(())
}

/// Print annotations under a line read in pipe mode.
pub fn print_annotations(
    out: &mut impl Write,
    result: &Result<FormatGuess, GuessError>,
) -> io::Result<()> {
    let arrow = "\u{21b3}".cyan();
    match result {
        Ok(guess) => {
            for format in guess.formats() {
                writeln!(out, "{} {}", arrow, format.green().bold())?;
            }
        }
        Err(e) => writeln!(out, "{} {}: {}", arrow, "error".red().bold(), e)?,
    }
    Ok(())
}
