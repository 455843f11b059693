//! Numeric UTC offsets (`+07:00`, `-0100`, `+07`).
//!
//! An offset spans several lexemes (sign, digits, colon, digits), so the
//! sequence builder first asks [`offset_len`] how much input the unit covers
//! and then hands the whole span to the offset rules.

use std::sync::OnceLock;

use regex::Regex;

use super::Rule;
use crate::types::SemanticCode::*;

/// Largest offset hour in use (UTC+14, Line Islands).
const MAX_OFFSET_HOURS: u32 = 14;

fn offset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-](\d{2})(?::(\d{2})|(\d{2}))?").unwrap())
}

/// Byte length of the offset that starts `rest`, if one does.
///
/// The offset must end on a lexeme boundary: `+070` is not an offset.
#[must_use]
pub fn offset_len(rest: &str) -> Option<usize> {
    let caps = offset_pattern().captures(rest)?;
    let whole = caps.get(0)?;

    let hours: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = match caps.get(2).or_else(|| caps.get(3)) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if hours > MAX_OFFSET_HOURS || minutes > 59 {
        return None;
    }

    match rest[whole.end()..].chars().next() {
        Some(c) if c.is_ascii_digit() || c == ':' => None,
        _ => Some(whole.end()),
    }
}

pub(super) fn offset_rules() -> Vec<Rule> {
    vec![
        Rule::word(r"^[+-]\d{2}:\d{2}$", &[TimezoneOffsetColon]),
        Rule::word(r"^[+-]\d{4}$", &[TimezoneOffsetNoColon]),
        Rule::word(r"^[+-]\d{2}$", &[TimezoneOffsetHourOnly]),
    ]
}
