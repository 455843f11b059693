//! Rendering templates in a target notation.
//!
//! The default notation is the canonical semantic form (`yyyy-MM-DD`).
//! `strftime` maps each code to its directive; codes without one (unpadded
//! month and day, ordinals, unpadded day of year) cannot be rendered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuessError;
use crate::types::{SemanticCode, Template, TemplatePart};

/// Letters that carry meaning in the default notation. A literal containing
/// any of them is bracketed so it reads back as text.
const RESERVED_LETTERS: &str = "yMDdEWHhmsSaZzo";

/// Output notation for rendered templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Default,
    Strftime,
}

impl Notation {
    pub const ALL: [Notation; 2] = [Self::Default, Self::Strftime];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strftime => "strftime",
        }
    }

    /// The token for `code`, or `None` when this notation has no equivalent.
    #[must_use]
    pub const fn token(self, code: SemanticCode) -> Option<&'static str> {
        match self {
            Self::Default => Some(default_token(code)),
            Self::Strftime => strftime_token(code),
        }
    }

    fn write_literal(self, text: &str, out: &mut String) {
        match self {
            Self::Default if text.chars().any(|c| RESERVED_LETTERS.contains(c)) => {
                out.push('[');
                out.push_str(text);
                out.push(']');
            }
            Self::Default => out.push_str(text),
            Self::Strftime => out.push_str(&text.replace('%', "%%")),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "strftime" => Ok(Self::Strftime),
            other => Err(format!(
                "unknown notation '{other}' (expected 'default' or 'strftime')"
            )),
        }
    }
}

const fn default_token(code: SemanticCode) -> &'static str {
    use SemanticCode::*;
    match code {
        FullYear => "yyyy",
        ShortYear => "yy",
        Month => "MM",
        MonthUnpadded => "M",
        MonthShort => "MMM",
        MonthFull => "MMMM",
        Day => "DD",
        DayUnpadded => "D",
        DayOrdinal => "Do",
        DayOfYear2to3 => "DDD",
        DayOfYear3 => "DDDD",
        DayOfYearOrdinal => "DDDo",
        WeekOfYear => "WW",
        Weekday => "E",
        WeekdayShort => "ddd",
        WeekdayFull => "dddd",
        Hour24 => "HH",
        Hour24Unpadded => "H",
        Hour12 => "hh",
        Hour12Unpadded => "h",
        Minute => "mm",
        Second => "ss",
        Millisecond => "SSS",
        Meridiem | MeridiemLower => "a",
        TimezoneOffsetColon | TimezoneOffsetHourOnly => "Z",
        TimezoneOffsetNoColon => "ZZ",
        TimezoneLiteralZ => "[Z]",
        TimezoneName => "z",
    }
}

const fn strftime_token(code: SemanticCode) -> Option<&'static str> {
    use SemanticCode::*;
    let token = match code {
        FullYear => "%Y",
        ShortYear => "%y",
        Month => "%m",
        MonthShort => "%b",
        MonthFull => "%B",
        Day => "%d",
        DayOfYear3 => "%j",
        WeekOfYear => "%U",
        Weekday => "%u",
        WeekdayShort => "%a",
        WeekdayFull => "%A",
        Hour24 => "%H",
        Hour24Unpadded => "%-H",
        Hour12 => "%I",
        Hour12Unpadded => "%-l",
        Minute => "%M",
        Second => "%S",
        Millisecond => "%L",
        Meridiem => "%p",
        MeridiemLower => "%P",
        TimezoneOffsetColon | TimezoneOffsetHourOnly => "%:z",
        TimezoneOffsetNoColon => "%z",
        TimezoneLiteralZ => "Z",
        TimezoneName => "%Z",
        MonthUnpadded | DayUnpadded | DayOrdinal | DayOfYear2to3 | DayOfYearOrdinal => {
            return None
        }
    };
    Some(token)
}

impl Template {
    /// Render in `notation`.
    ///
    /// # Errors
    ///
    /// [`GuessError::Unrepresentable`] when a code has no token in
    /// `notation`.
    pub fn render(&self, notation: Notation) -> Result<String, GuessError> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => notation.write_literal(text, &mut out),
                TemplatePart::Code(code) => {
                    let token = notation.token(*code).ok_or(GuessError::Unrepresentable {
                        notation,
                        token: default_token(*code),
                    })?;
                    out.push_str(token);
                }
            }
        }
        Ok(out)
    }
}

/// Default notation never fails.
pub(crate) fn render_default(template: &Template) -> String {
    let mut out = String::new();
    for part in &template.parts {
        match part {
            TemplatePart::Literal(text) => Notation::Default.write_literal(text, &mut out),
            TemplatePart::Code(code) => out.push_str(default_token(*code)),
        }
    }
    out
}
