//! Calendar families: year, month, day, day of year, ISO week, weekday number.
//!
//! Compact ISO 8601 basic runs (`20130208`, `2013050`, `201303`) are led by
//! the year, so the year family owns them.

use super::Rule;
use crate::types::SemanticCode::*;

pub(super) fn year_rules() -> Vec<Rule> {
    vec![
        Rule::digits(r"^\d{4}$", &[FullYear]),
        Rule::digits(r"^\d{2}$", &[ShortYear]),
        // yyyyMMDD
        Rule::digits(r"^(\d{4})(\d{2})(\d{2})$", &[FullYear, Month, Day]),
        // yyyyDDDD
        Rule::digits(r"^(\d{4})(\d{3})$", &[FullYear, DayOfYear3]),
        // yyyyMM
        Rule::digits(r"^(\d{4})(\d{2})$", &[FullYear, Month]),
    ]
}

pub(super) fn month_rules() -> Vec<Rule> {
    vec![
        Rule::digits(r"^\d{2}$", &[Month]),
        Rule::digits(r"^\d$", &[MonthUnpadded]),
    ]
}

pub(super) fn day_rules() -> Vec<Rule> {
    vec![
        Rule::digits(r"^\d{2}$", &[Day]),
        Rule::digits(r"^\d$", &[DayUnpadded]),
        Rule::digits(r"^(\d{1,2})(?i:st|nd|rd|th)$", &[DayOrdinal]),
    ]
}

pub(super) fn day_of_year_rules() -> Vec<Rule> {
    vec![
        // Only three digit runs: a two digit day-of-year would also read every
        // `yyyy-MM` as `yyyy-DDD`, so `2020-45` stays unparseable.
        Rule::digits(r"^[1-9]\d{2}$", &[DayOfYear2to3]),
        Rule::digits(r"^\d{3}$", &[DayOfYear3]),
        Rule::digits(r"^(\d{1,3})(?i:st|nd|rd|th)$", &[DayOfYearOrdinal]),
    ]
}

/// Only consulted for the digits right after a `W` designator.
pub(super) fn week_rules() -> Vec<Rule> {
    vec![
        Rule::digits(r"^\d{2}$", &[WeekOfYear]),
        // WWE, as in 2013W065
        Rule::digits(r"^(\d{2})(\d)$", &[WeekOfYear, Weekday]),
    ]
}

pub(super) fn weekday_rules() -> Vec<Rule> {
    vec![Rule::digits(r"^\d$", &[Weekday])]
}

#[cfg(test)]
mod tests {
    use super::super::Assigner;
    use crate::types::{LexemeKind, Part, Reading, SemanticCode};
    use pretty_assertions::assert_eq;

    fn first_codes(assigner: Assigner, text: &str) -> Vec<SemanticCode> {
        assigner
            .assign(text, LexemeKind::Numeric)
            .first()
            .map(|r| r.parts.iter().map(|p| p.code).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_year_lengths() {
        assert_eq!(first_codes(Assigner::Year, "2020"), vec![SemanticCode::FullYear]);
        assert_eq!(first_codes(Assigner::Year, "20"), vec![SemanticCode::ShortYear]);
        assert!(first_codes(Assigner::Year, "202").is_empty());
        assert!(first_codes(Assigner::Year, "2").is_empty());
    }

    #[test]
    fn test_compact_ordinal_date() {
        assert_eq!(
            Assigner::Year.assign("2013050", LexemeKind::Numeric),
            vec![Reading::compound(vec![
                Part::new(SemanticCode::FullYear, Some(2013)),
                Part::new(SemanticCode::DayOfYear3, Some(50)),
            ])]
        );
    }

    #[test]
    fn test_compact_year_month() {
        assert_eq!(
            first_codes(Assigner::Year, "201303"),
            vec![SemanticCode::FullYear, SemanticCode::Month]
        );
    }

    #[test]
    fn test_padding_picks_code() {
        assert_eq!(first_codes(Assigner::Month, "01"), vec![SemanticCode::Month]);
        assert_eq!(first_codes(Assigner::Month, "1"), vec![SemanticCode::MonthUnpadded]);
        assert_eq!(first_codes(Assigner::Day, "7"), vec![SemanticCode::DayUnpadded]);
        assert!(first_codes(Assigner::Month, "123").is_empty());
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(
            Assigner::Day.assign("21st", LexemeKind::Numeric),
            vec![Reading::single(SemanticCode::DayOrdinal, Some(21))]
        );
        assert_eq!(
            Assigner::DayOfYear.assign("39TH", LexemeKind::Numeric),
            vec![Reading::single(SemanticCode::DayOfYearOrdinal, Some(39))]
        );
    }

    #[test]
    fn test_week_with_weekday() {
        assert_eq!(
            Assigner::Week.assign("065", LexemeKind::Numeric),
            vec![Reading::compound(vec![
                Part::new(SemanticCode::WeekOfYear, Some(6)),
                Part::new(SemanticCode::Weekday, Some(5)),
            ])]
        );
    }
}
