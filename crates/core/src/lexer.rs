//! Lexeme classifier.
//!
//! Splits an input into maximal runs of digits, letters, whitespace and
//! everything else, keeping the text and byte offset of each run. No
//! interpretation happens here.

use crate::types::{Lexeme, LexemeKind};

fn kind_of(c: char) -> LexemeKind {
    if c.is_ascii_digit() {
        LexemeKind::Numeric
    } else if c.is_alphabetic() {
        LexemeKind::Alpha
    } else if c.is_whitespace() {
        LexemeKind::Whitespace
    } else {
        LexemeKind::Symbol
    }
}

/// Split `input` into lexemes. An empty input yields no lexemes.
#[must_use]
pub fn classify(input: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut run: Option<(LexemeKind, usize)> = None;

    for (i, c) in input.char_indices() {
        let kind = kind_of(c);
        match run {
            Some((current, _)) if current == kind => {}
            Some((current, start)) => {
                lexemes.push(Lexeme {
                    raw: input[start..i].to_string(),
                    kind: current,
                    start,
                });
                run = Some((kind, i));
            }
            None => run = Some((kind, i)),
        }
    }

    // Close the trailing run
    if let Some((kind, start)) = run {
        lexemes.push(Lexeme {
            raw: input[start..].to_string(),
            kind,
            start,
        });
    }

    lexemes
}
