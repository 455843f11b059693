//! Pattern table and assigners.
//!
//! Each [`Assigner`] owns an ordered list of rules for one role family. A
//! rule is a regular pattern plus the code(s) a match proves. Assigners only
//! ever add readings; picking between them is the resolver's job.
//!
//! Rules test shape, not range: `99` is a Month-shaped two digit run even
//! though no month 99 exists. Ranges are checked during resolution so the
//! pruning happens in one place.

mod calendar;
mod clock;
mod names;
mod zone;

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{LexemeKind, Part, Reading, SemanticCode};

pub use names::month_number;
pub use zone::offset_len;

/// Role-family rule sets, keyed by the lexical kind they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assigner {
    Year,
    Month,
    Day,
    DayOfYear,
    Week,
    Weekday,
    Hour,
    Minute,
    Second,
    Fraction,
    Meridiem,
    MonthName,
    WeekdayName,
    TimezoneName,
    Offset,
}

impl Assigner {
    pub const COUNT: usize = 15;

    /// Assigners tried on a numeric value outside any clock context.
    pub const DATE: &'static [Assigner] = &[
        Self::Year,
        Self::Month,
        Self::Day,
        Self::DayOfYear,
        Self::Weekday,
    ];

    /// Assigners tried on every alphabetic lexeme.
    pub const WORDS: &'static [Assigner] = &[
        Self::Meridiem,
        Self::MonthName,
        Self::WeekdayName,
        Self::TimezoneName,
    ];

    /// Short name used in trace output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::DayOfYear => "day-of-year",
            Self::Week => "week",
            Self::Weekday => "weekday",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Fraction => "fraction",
            Self::Meridiem => "meridiem",
            Self::MonthName => "month-name",
            Self::WeekdayName => "weekday-name",
            Self::TimezoneName => "timezone-name",
            Self::Offset => "offset",
        }
    }

    /// The lexical kind this assigner evaluates.
    #[must_use]
    pub const fn kind(self) -> LexemeKind {
        match self {
            Self::Meridiem | Self::MonthName | Self::WeekdayName | Self::TimezoneName => {
                LexemeKind::Alpha
            }
            Self::Offset => LexemeKind::Symbol,
            _ => LexemeKind::Numeric,
        }
    }

    /// This assigner's rules, in declared order.
    #[must_use]
    pub fn rules(self) -> &'static [Rule] {
        &patterns().rules[self as usize]
    }

    /// Readings this assigner proves for `text`. Empty when the kind does
    /// not match or no rule applies.
    #[must_use]
    pub fn assign(self, text: &str, kind: LexemeKind) -> Vec<Reading> {
        if kind != self.kind() {
            return vec![];
        }
        self.rules()
            .iter()
            .filter_map(|rule| rule.reading(text))
            .collect()
    }
}

/// Run every eligible assigner over `text` and collect the distinct readings.
#[must_use]
pub fn assign_all(text: &str, kind: LexemeKind, eligible: &[Assigner]) -> Vec<Reading> {
    eligible
        .iter()
        .flat_map(|assigner| {
            let readings = assigner.assign(text, kind);
            if !readings.is_empty() {
                tracing::trace!(
                    text,
                    assigner = assigner.name(),
                    count = readings.len(),
                    "assigned"
                );
            }
            readings
        })
        .fold(Vec::new(), |mut acc, reading| {
            if !acc.contains(&reading) {
                acc.push(reading);
            }
            acc
        })
}

/// How a rule derives the value of its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Parse the matched digits
    Digits,
    /// Look the text up as a month name
    MonthName,
    /// The code carries no value
    Nothing,
}

/// A pattern and the code(s) it proves.
///
/// With a single code the value comes from capture group 1 when present,
/// otherwise the whole match. With several codes, code `i` takes capture
/// group `i + 1` and its value is always parsed as digits.
#[derive(Debug)]
pub struct Rule {
    pub pattern: Regex,
    pub codes: &'static [SemanticCode],
    pub value: ValueSource,
}

impl Rule {
    fn new(pattern: &str, codes: &'static [SemanticCode], value: ValueSource) -> Self {
        Self {
            // Rule patterns are literals in this crate; a bad one is a bug
            pattern: Regex::new(pattern).unwrap(),
            codes,
            value,
        }
    }

    /// A rule whose only code takes its value from the matched digits.
    pub(crate) fn digits(pattern: &str, code: &'static [SemanticCode]) -> Self {
        Self::new(pattern, code, ValueSource::Digits)
    }

    pub(crate) fn word(pattern: &str, code: &'static [SemanticCode]) -> Self {
        Self::new(pattern, code, ValueSource::Nothing)
    }

    pub(crate) fn month_name(pattern: &str, code: &'static [SemanticCode]) -> Self {
        Self::new(pattern, code, ValueSource::MonthName)
    }

    /// Apply this rule to `text`.
    #[must_use]
    pub fn reading(&self, text: &str) -> Option<Reading> {
        let caps = self.pattern.captures(text)?;

        if let [code] = self.codes {
            let matched = caps.get(1).or_else(|| caps.get(0))?.as_str();
            let value = match self.value {
                ValueSource::Digits => Some(matched.parse().ok()?),
                ValueSource::MonthName => Some(month_number(matched)?),
                ValueSource::Nothing => None,
            };
            return Some(Reading::single(*code, value));
        }

        let parts = self
            .codes
            .iter()
            .enumerate()
            .map(|(i, code)| {
                let digits = caps.get(i + 1)?.as_str();
                Some(Part::new(*code, Some(digits.parse().ok()?)))
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Reading::compound(parts))
    }
}

/// The process-wide rule table, indexed by [`Assigner`].
pub struct PatternTable {
    rules: Vec<Vec<Rule>>,
}

impl PatternTable {
    fn new() -> Self {
        let mut rules: Vec<Vec<Rule>> = (0..Assigner::COUNT).map(|_| Vec::new()).collect();
        rules[Assigner::Year as usize] = calendar::year_rules();
        rules[Assigner::Month as usize] = calendar::month_rules();
        rules[Assigner::Day as usize] = calendar::day_rules();
        rules[Assigner::DayOfYear as usize] = calendar::day_of_year_rules();
        rules[Assigner::Week as usize] = calendar::week_rules();
        rules[Assigner::Weekday as usize] = calendar::weekday_rules();
        rules[Assigner::Hour as usize] = clock::hour_rules();
        rules[Assigner::Minute as usize] = clock::minute_rules();
        rules[Assigner::Second as usize] = clock::second_rules();
        rules[Assigner::Fraction as usize] = clock::fraction_rules();
        rules[Assigner::Meridiem as usize] = clock::meridiem_rules();
        rules[Assigner::MonthName as usize] = names::month_name_rules();
        rules[Assigner::WeekdayName as usize] = names::weekday_name_rules();
        rules[Assigner::TimezoneName as usize] = names::timezone_name_rules();
        rules[Assigner::Offset as usize] = zone::offset_rules();
        Self { rules }
    }
}

/// The shared pattern table, built on first use.
pub fn patterns() -> &'static PatternTable {
    static PATTERNS: OnceLock<PatternTable> = OnceLock::new();
    PATTERNS.get_or_init(PatternTable::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn codes(readings: &[Reading]) -> Vec<Vec<SemanticCode>> {
        readings
            .iter()
            .map(|r| r.parts.iter().map(|p| p.code).collect())
            .collect()
    }

    #[test]
    fn test_two_digit_run_is_ambiguous() {
        let readings = assign_all("01", LexemeKind::Numeric, Assigner::DATE);
        assert_eq!(
            codes(&readings),
            vec![
                vec![SemanticCode::ShortYear],
                vec![SemanticCode::Month],
                vec![SemanticCode::Day],
            ]
        );
    }

    #[test]
    fn test_kind_gate() {
        assert!(Assigner::Month.assign("Jan", LexemeKind::Alpha).is_empty());
        assert!(Assigner::MonthName.assign("Jan", LexemeKind::Numeric).is_empty());
        assert_eq!(
            codes(&Assigner::MonthName.assign("Jan", LexemeKind::Alpha)),
            vec![vec![SemanticCode::MonthShort]]
        );
    }

    #[test]
    fn test_shape_not_range() {
        // 99 is shaped like a month; the resolver rejects it
        let readings = Assigner::Month.assign("99", LexemeKind::Numeric);
        assert_eq!(readings, vec![Reading::single(SemanticCode::Month, Some(99))]);
    }

    #[test]
    fn test_compound_reading_values() {
        let readings = Assigner::Year.assign("20130208", LexemeKind::Numeric);
        assert_eq!(
            readings,
            vec![Reading::compound(vec![
                Part::new(SemanticCode::FullYear, Some(2013)),
                Part::new(SemanticCode::Month, Some(2)),
                Part::new(SemanticCode::Day, Some(8)),
            ])]
        );
    }

    #[test]
    fn test_three_digit_day_of_year_matches_both_rules() {
        let padded = Assigner::DayOfYear.assign("039", LexemeKind::Numeric);
        assert_eq!(codes(&padded), vec![vec![SemanticCode::DayOfYear3]]);

        let unpadded = Assigner::DayOfYear.assign("123", LexemeKind::Numeric);
        assert_eq!(
            codes(&unpadded),
            vec![
                vec![SemanticCode::DayOfYear2to3],
                vec![SemanticCode::DayOfYear3]
            ]
        );
    }

    #[test]
    fn test_duplicate_readings_collapse() {
        let readings = assign_all(
            "12",
            LexemeKind::Numeric,
            &[Assigner::Month, Assigner::Month],
        );
        assert_eq!(readings.len(), 1);
    }

    #[test]
    fn test_every_assigner_has_rules() {
        let all = [
            Assigner::Year,
            Assigner::Month,
            Assigner::Day,
            Assigner::DayOfYear,
            Assigner::Week,
            Assigner::Weekday,
            Assigner::Hour,
            Assigner::Minute,
            Assigner::Second,
            Assigner::Fraction,
            Assigner::Meridiem,
            Assigner::MonthName,
            Assigner::WeekdayName,
            Assigner::TimezoneName,
            Assigner::Offset,
        ];
        assert_eq!(all.len(), Assigner::COUNT);
        for assigner in all {
            assert!(!assigner.rules().is_empty(), "{} has no rules", assigner.name());
        }
    }
}
