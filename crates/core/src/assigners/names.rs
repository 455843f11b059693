//! Word families: month names, weekday names, timezone abbreviations.

use super::Rule;
use crate::types::SemanticCode::*;

const MONTH_PREFIXES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Abbreviations accepted as `z`, in any case. `Z` itself is the zero
/// offset, not a name, and only matches in upper case.
const ZONE_NAMES: &[&str] = &[
    "UTC", "GMT", "UT", "EST", "EDT", "CST", "CDT", "MST", "MDT", "PST", "PDT", "AKST", "AKDT",
    "HST", "IST", "CET", "CEST", "EET", "EEST", "WET", "WEST", "BST", "MSK", "JST", "KST", "HKT",
    "SGT", "AEST", "AEDT", "ACST", "ACDT", "AWST", "NZST", "NZDT", "SAST", "WAT", "CAT", "EAT",
    "BRT", "ART",
];

/// Month number (1-12) for a month name or its three letter abbreviation.
#[must_use]
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let prefix = lower.get(..3)?;
    MONTH_PREFIXES
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u32 + 1)
}

pub(super) fn month_name_rules() -> Vec<Rule> {
    vec![
        Rule::month_name(
            r"(?i)^(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)$",
            &[MonthShort],
        ),
        // "may" is already an abbreviation
        Rule::month_name(
            r"(?i)^(january|february|march|april|june|july|august|september|october|november|december)$",
            &[MonthFull],
        ),
    ]
}

pub(super) fn weekday_name_rules() -> Vec<Rule> {
    vec![
        Rule::word(r"(?i)^(?:mon|tue|wed|thu|fri|sat|sun)$", &[WeekdayShort]),
        Rule::word(
            r"(?i)^(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)$",
            &[WeekdayFull],
        ),
    ]
}

pub(super) fn timezone_name_rules() -> Vec<Rule> {
    let names = ZONE_NAMES.join("|");
    vec![
        Rule::word(r"^Z$", &[TimezoneLiteralZ]),
        Rule::word(&format!("(?i)^(?:{names})$"), &[TimezoneName]),
    ]
}
