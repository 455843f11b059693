//! Candidate resolution.
//!
//! Every field token holds a list of readings. The resolver walks them depth
//! first in input order, keeps a running assignment, and drops a branch as
//! soon as the assignment breaks a constraint that can only get worse:
//!
//! - one code per role family, values inside the code's range;
//! - day-of-year and week dates exclude month and day (and each other), and
//!   need a year before them; a weekday number needs a week;
//! - minutes directly follow hours, seconds minutes, fractions seconds;
//! - a meridiem never sits with a 24-hour hour;
//! - no date part after a clock part in the same whitespace-separated group
//!   (`01.02.03` is never `HH.mm.DD`, but `10:00 13/01/2020` is fine).
//!
//! Complete assignments then pass the whole-template checks (meridiem for a
//! 12-hour hour, year/month/day order, month lengths) and become templates.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::GuessError;
use crate::sequence::TokenSequence;
use crate::types::{ClassifiedToken, Part, Reading, RoleFamily, SemanticCode, Template, TemplatePart};

/// How strictly day values are checked against their month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarCheck {
    /// Real month lengths. February allows 29 unless a four digit year
    /// says otherwise; day 366 needs a leap year when the year is known.
    #[default]
    Strict,
    /// Any day from 1 to 31 in any month.
    Lenient,
}

/// Resolver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveConfig {
    pub calendar: CalendarCheck,
}

impl ResolveConfig {
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            calendar: CalendarCheck::Lenient,
        }
    }
}

/// Day counts per month, February at its leap-year maximum.
const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Accepted sequences of year (Y), month (M) and day (D) parts.
const NUMERIC_ORDERS: &[&[RoleFamily]] = {
    use RoleFamily::{Day as D, Month as M, Year as Y};
    &[
        &[Y, M, D],
        &[M, D, Y],
        &[D, M, Y],
        &[Y, M],
        &[M, D],
        &[D, M],
        &[Y],
        &[M],
        &[D],
        &[],
    ]
};

/// With a month name, year-first orders are out and month-year is in.
const NAMED_ORDERS: &[&[RoleFamily]] = {
    use RoleFamily::{Day as D, Month as M, Year as Y};
    &[&[M, D, Y], &[D, M, Y], &[M, D], &[D, M], &[M, Y], &[M]]
};

/// Every template the sequence can take.
///
/// # Errors
///
/// [`GuessError::Unparseable`] when no assignment satisfies all constraints.
pub fn resolve(
    sequence: &TokenSequence,
    config: &ResolveConfig,
) -> Result<BTreeSet<Template>, GuessError> {
    let fields: Vec<&[Reading]> = sequence.fields().collect();
    if fields.is_empty() {
        return Err(GuessError::Unparseable);
    }
    let breaks = group_breaks(sequence);

    let mut search = Search {
        fields: &fields,
        breaks: &breaks,
        calendar: config.calendar,
        assignment: Assignment::default(),
        chosen: Vec::with_capacity(fields.len()),
        accepted: Vec::new(),
        visited: 0,
    };
    search.descend(0);

    let templates: BTreeSet<Template> = search
        .accepted
        .iter()
        .map(|chosen| build_template(sequence, chosen))
        .collect();

    tracing::debug!(
        fields = fields.len(),
        visited = search.visited,
        templates = templates.len(),
        "resolved"
    );

    if templates.is_empty() {
        return Err(GuessError::Unparseable);
    }
    Ok(templates)
}

/// For each field, whether whitespace separates it from the field before.
fn group_breaks(sequence: &TokenSequence) -> Vec<bool> {
    let mut breaks = Vec::new();
    let mut spaced = false;
    for token in sequence.tokens() {
        match token {
            ClassifiedToken::Literal { text, .. } => {
                spaced |= text.chars().any(char::is_whitespace);
            }
            ClassifiedToken::Field { .. } => {
                breaks.push(spaced);
                spaced = false;
            }
        }
    }
    breaks
}

struct Search<'a> {
    fields: &'a [&'a [Reading]],
    breaks: &'a [bool],
    calendar: CalendarCheck,
    assignment: Assignment,
    /// Reading index taken at each field so far
    chosen: Vec<usize>,
    accepted: Vec<Vec<usize>>,
    visited: usize,
}

impl Search<'_> {
    fn descend(&mut self, depth: usize) {
        let fields = self.fields;
        let Some(candidates) = fields.get(depth).copied() else {
            if self.assignment.is_complete(self.calendar) {
                self.accepted.push(self.chosen.clone());
            }
            return;
        };

        let new_group = self.breaks.get(depth).copied().unwrap_or(false);
        for (index, reading) in candidates.iter().enumerate() {
            self.visited += 1;
            let checkpoint = self.assignment.checkpoint();
            if new_group {
                self.assignment.clock_in_group = false;
            }
            if self.assignment.extend(reading) {
                self.chosen.push(index);
                self.descend(depth + 1);
                self.chosen.pop();
            } else {
                tracing::trace!(depth, ?reading, "pruned");
            }
            self.assignment.restore(checkpoint);
        }
    }
}

#[derive(Debug, Default)]
struct Assignment {
    parts: Vec<Part>,
    /// Bitset of filled role families
    filled: u16,
    /// A clock part was taken since the last whitespace
    clock_in_group: bool,
}

#[derive(Clone, Copy)]
struct Checkpoint {
    len: usize,
    filled: u16,
    clock_in_group: bool,
}

impl Assignment {
    fn has(&self, family: RoleFamily) -> bool {
        self.filled & family.bit() != 0
    }

    fn part(&self, family: RoleFamily) -> Option<&Part> {
        self.parts.iter().find(|p| p.code.family() == family)
    }

    fn value(&self, family: RoleFamily) -> Option<u32> {
        self.part(family).and_then(|p| p.value)
    }

    fn has_twelve_hour(&self) -> bool {
        self.part(RoleFamily::Hour)
            .is_some_and(|p| p.code.is_twelve_hour())
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            len: self.parts.len(),
            filled: self.filled,
            clock_in_group: self.clock_in_group,
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.parts.truncate(checkpoint.len);
        self.filled = checkpoint.filled;
        self.clock_in_group = checkpoint.clock_in_group;
    }

    /// Push every part of `reading`, stopping at the first one refused.
    /// The caller restores a checkpoint either way.
    fn extend(&mut self, reading: &Reading) -> bool {
        for part in &reading.parts {
            if !self.admits(part) {
                return false;
            }
            let family = part.code.family();
            self.filled |= family.bit();
            self.clock_in_group |= family.is_clock();
            self.parts.push(*part);
        }
        true
    }

    /// Constraints that hold for every prefix of a valid assignment.
    fn admits(&self, part: &Part) -> bool {
        use RoleFamily::*;

        let family = part.code.family();
        if !part.in_range() || self.has(family) {
            return false;
        }

        let is_date = matches!(family, Year | Month | Day | DayOfYear | Week)
            || part.code == SemanticCode::Weekday;
        if is_date && self.clock_in_group {
            return false;
        }

        let previous = self.parts.last().map(|p| p.code.family());
        match family {
            Month | Day => !self.has(DayOfYear) && !self.has(Week),
            DayOfYear => self.has(Year) && !self.has(Month) && !self.has(Day) && !self.has(Week),
            Week => self.has(Year) && !self.has(Month) && !self.has(Day) && !self.has(DayOfYear),
            Weekday if part.code == SemanticCode::Weekday => self.has(Week),
            Minute => previous == Some(Hour),
            Second => previous == Some(Minute),
            Fraction => previous == Some(Second),
            Meridiem => !self.has(Hour) || self.has_twelve_hour(),
            Hour => !self.has(Meridiem) || part.code.is_twelve_hour(),
            _ => true,
        }
    }

    /// Constraints that need the whole template.
    fn is_complete(&self, calendar: CalendarCheck) -> bool {
        self.has_twelve_hour() == self.has(RoleFamily::Meridiem)
            && self.date_order_ok()
            && self.calendar_ok(calendar)
    }

    fn date_order_ok(&self) -> bool {
        let order: Vec<RoleFamily> = self
            .parts
            .iter()
            .map(|p| p.code.family())
            .filter(|f| matches!(f, RoleFamily::Year | RoleFamily::Month | RoleFamily::Day))
            .collect();
        let named = self
            .part(RoleFamily::Month)
            .is_some_and(|p| p.code.is_month_name());
        let allowed = if named { NAMED_ORDERS } else { NUMERIC_ORDERS };
        allowed.iter().any(|o| *o == order.as_slice())
    }

    fn calendar_ok(&self, calendar: CalendarCheck) -> bool {
        if calendar == CalendarCheck::Lenient {
            return true;
        }

        let full_year = self
            .part(RoleFamily::Year)
            .filter(|p| p.code == SemanticCode::FullYear)
            .and_then(|p| p.value)
            .and_then(|y| i32::try_from(y).ok());

        if let (Some(month), Some(day)) = (self.value(RoleFamily::Month), self.value(RoleFamily::Day)) {
            return match full_year {
                Some(year) => NaiveDate::from_ymd_opt(year, month, day).is_some(),
                None => month
                    .checked_sub(1)
                    .and_then(|i| DAYS_IN_MONTH.get(i as usize))
                    .is_some_and(|max| day <= *max),
            };
        }

        if let (Some(year), Some(ordinal)) = (full_year, self.value(RoleFamily::DayOfYear)) {
            return NaiveDate::from_yo_opt(year, ordinal).is_some();
        }

        true
    }
}

fn build_template(sequence: &TokenSequence, chosen: &[usize]) -> Template {
    let mut picks = chosen.iter();
    let mut parts = Vec::new();
    for token in sequence.tokens() {
        match token {
            ClassifiedToken::Literal { text, .. } => parts.push(TemplatePart::Literal(text.clone())),
            ClassifiedToken::Field { candidates, .. } => {
                let reading = picks.next().and_then(|&i| candidates.get(i));
                if let Some(reading) = reading {
                    parts.extend(reading.parts.iter().map(|p| TemplatePart::Code(p.code)));
                }
            }
        }
    }
    Template { parts }
}
