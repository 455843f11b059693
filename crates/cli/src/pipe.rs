//! Pipe mode for processing stdin line by line.
//!
//! Each non-blank line is guessed on its own. Human output echoes the line
//! and annotates it with the candidate formats; JSON output writes one
//! record per line.

use std::io::{self, BufRead, Write};

use dateguess_core::Guesser;

use crate::output::{self, OutputConfig};

/// Run pipe mode over stdin. Returns whether every line was guessed.
pub fn run_pipe_mode(guesser: &Guesser, config: &OutputConfig) -> io::Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    process_lines(guesser, stdin.lock(), &mut stdout.lock(), config)
}

/// Guess every line of `input`, writing results to `out`.
pub fn process_lines(
    guesser: &Guesser,
    input: impl BufRead,
    out: &mut impl Write,
    config: &OutputConfig,
) -> io::Result<bool> {
    let mut all_ok = true;
    let mut count = 0usize;

    for line_result in input.lines() {
        let line = line_result?;
        let text = line.trim();
        if text.is_empty() {
            if !config.json {
                writeln!(out)?;
            }
            continue;
        }

        count += 1;
        let result = guesser.guess(text, config.notation);
        all_ok &= result.is_ok();

        if config.json {
            writeln!(out, "{}", output::json_record(text, config.notation, &result))?;
        } else {
            writeln!(out, "{}", line)?;
            output::print_annotations(out, &result)?;
        }
    }

    tracing::debug!(lines = count, all_ok, "pipe mode finished");
    Ok(all_ok)
}
