//! Core types for dateguess.
//!
//! These types carry an input through the pipeline: lexemes from the
//! classifier, candidate readings from the assigners, and resolved templates.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Lexical class of a run of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexemeKind {
    Numeric,
    Alpha,
    Symbol,
    Whitespace,
}

/// A maximal run of same-class characters from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub raw: String,
    pub kind: LexemeKind,
    /// Byte offset of the first character in the input
    pub start: usize,
}

impl Lexeme {
    /// Byte offset just past the last character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.raw.len()
    }

    #[must_use]
    pub fn is(&self, kind: LexemeKind) -> bool {
        self.kind == kind
    }

    /// True for a symbol lexeme consisting of exactly `text`.
    #[must_use]
    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind == LexemeKind::Symbol && self.raw == text
    }
}

/// Role families. A template holds at most one code per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoleFamily {
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
    Offset,
    ZoneName,
}

impl RoleFamily {
    pub const ALL: [RoleFamily; 13] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::DayOfYear,
        Self::Week,
        Self::Weekday,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Fraction,
        Self::Meridiem,
        Self::Offset,
        Self::ZoneName,
    ];

    /// Bit used when tracking which families an assignment has filled.
    #[must_use]
    pub const fn bit(self) -> u16 {
        1 << self as u16
    }

    /// Families that make up the time-of-day half of a template.
    #[must_use]
    pub const fn is_clock(self) -> bool {
        matches!(
            self,
            Self::Hour | Self::Minute | Self::Second | Self::Fraction
        )
    }
}

/// A date/time role a token can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SemanticCode {
    FullYear,
    ShortYear,
    Month,
    MonthUnpadded,
    /// Abbreviated month name (`Jan`)
    MonthShort,
    /// Full month name (`January`)
    MonthFull,
    Day,
    DayUnpadded,
    DayOrdinal,
    /// Day of year written without leading zeros (`123`)
    DayOfYear2to3,
    /// Zero-padded three digit day of year (`039`)
    DayOfYear3,
    DayOfYearOrdinal,
    WeekOfYear,
    /// ISO weekday number, Monday = 1
    Weekday,
    WeekdayShort,
    WeekdayFull,
    Hour24,
    Hour24Unpadded,
    Hour12,
    Hour12Unpadded,
    Minute,
    Second,
    Millisecond,
    /// `AM` / `PM`
    Meridiem,
    /// `am` / `pm`
    MeridiemLower,
    TimezoneOffsetColon,
    TimezoneOffsetNoColon,
    TimezoneOffsetHourOnly,
    TimezoneLiteralZ,
    TimezoneName,
}

impl SemanticCode {
    #[must_use]
    pub const fn family(self) -> RoleFamily {
        use SemanticCode::*;
        match self {
            FullYear | ShortYear => RoleFamily::Year,
            Month | MonthUnpadded | MonthShort | MonthFull => RoleFamily::Month,
            Day | DayUnpadded | DayOrdinal => RoleFamily::Day,
            DayOfYear2to3 | DayOfYear3 | DayOfYearOrdinal => RoleFamily::DayOfYear,
            WeekOfYear => RoleFamily::Week,
            Weekday | WeekdayShort | WeekdayFull => RoleFamily::Weekday,
            Hour24 | Hour24Unpadded | Hour12 | Hour12Unpadded => RoleFamily::Hour,
            Minute => RoleFamily::Minute,
            Second => RoleFamily::Second,
            Millisecond => RoleFamily::Fraction,
            Meridiem | MeridiemLower => RoleFamily::Meridiem,
            TimezoneOffsetColon
            | TimezoneOffsetNoColon
            | TimezoneOffsetHourOnly
            | TimezoneLiteralZ => RoleFamily::Offset,
            TimezoneName => RoleFamily::ZoneName,
        }
    }

    /// Legal range of the numeric value, for codes that carry one.
    #[must_use]
    pub fn range(self) -> Option<RangeInclusive<u32>> {
        use SemanticCode::*;
        let range = match self {
            FullYear => 0..=9999,
            ShortYear => 0..=99,
            Month | MonthUnpadded | MonthShort | MonthFull => 1..=12,
            Day | DayUnpadded | DayOrdinal => 1..=31,
            DayOfYear2to3 | DayOfYear3 | DayOfYearOrdinal => 1..=366,
            WeekOfYear => 0..=53,
            Weekday => 1..=7,
            Hour24 | Hour24Unpadded => 0..=23,
            Hour12 | Hour12Unpadded => 1..=12,
            Minute | Second => 0..=59,
            Millisecond => 0..=999,
            _ => return None,
        };
        Some(range)
    }

    #[must_use]
    pub const fn is_twelve_hour(self) -> bool {
        matches!(self, Self::Hour12 | Self::Hour12Unpadded)
    }

    #[must_use]
    pub const fn is_month_name(self) -> bool {
        matches!(self, Self::MonthShort | Self::MonthFull)
    }
}

/// One code claimed by a token, with the numeric value it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub code: SemanticCode,
    pub value: Option<u32>,
}

impl Part {
    #[must_use]
    pub const fn new(code: SemanticCode, value: Option<u32>) -> Self {
        Self { code, value }
    }

    /// Whether the value (if any) lies inside the code's legal range.
    #[must_use]
    pub fn in_range(&self) -> bool {
        match (self.code.range(), self.value) {
            (Some(range), Some(value)) => range.contains(&value),
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}

/// One interpretation of a token.
///
/// Usually a single part; compact ISO 8601 runs such as `20130208` read as
/// several parts laid end to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub parts: Vec<Part>,
}

impl Reading {
    #[must_use]
    pub fn single(code: SemanticCode, value: Option<u32>) -> Self {
        Self {
            parts: vec![Part::new(code, value)],
        }
    }

    #[must_use]
    pub fn compound(parts: Vec<Part>) -> Self {
        Self { parts }
    }
}

/// A position in the token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedToken {
    /// Separator or designator copied into the template verbatim.
    Literal { text: String, start: usize },
    /// A value that must take one of its candidate readings.
    Field {
        text: String,
        start: usize,
        candidates: Vec<Reading>,
    },
}

impl ClassifiedToken {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal { text, .. } | Self::Field { text, .. } => text,
        }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        match self {
            Self::Literal { start, .. } | Self::Field { start, .. } => *start,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[Reading] {
        match self {
            Self::Literal { .. } => &[],
            Self::Field { candidates, .. } => candidates,
        }
    }
}

/// One element of a resolved template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TemplatePart {
    Literal(String),
    Code(SemanticCode),
}

/// An ordered sequence of codes and literal separators describing the
/// shape of an input.
///
/// `Display` gives the canonical semantic form, which is the default
/// notation (`yyyy-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Template {
    pub parts: Vec<TemplatePart>,
}

impl Template {
    /// Codes in template order, literals skipped.
    pub fn codes(&self) -> impl Iterator<Item = SemanticCode> + '_ {
        self.parts.iter().filter_map(|p| match p {
            TemplatePart::Code(code) => Some(*code),
            TemplatePart::Literal(_) => None,
        })
    }

    /// Literal separators in template order.
    pub fn literals(&self) -> impl Iterator<Item = &str> + '_ {
        self.parts.iter().filter_map(|p| match p {
            TemplatePart::Literal(text) => Some(text.as_str()),
            TemplatePart::Code(_) => None,
        })
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::notation::render_default(self))
    }
}
