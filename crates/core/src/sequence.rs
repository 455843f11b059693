//! Token sequence: lexemes turned into literals and candidate-bearing fields.
//!
//! The builder looks at each lexeme's neighbours to decide which assigners
//! it may consult, then folds those assigners over the lexeme:
//!
//! - digits joined by `:` are clock values only (`12:30`);
//! - two or three short runs joined by `.` may also be a clock (`01.02.03`);
//! - a short run after whitespace and before the end, `AM`, `Z` or an offset
//!   may be an hour (`2013-02-08 09`), and so may a leading one before `AM`;
//! - a run right after the `T` designator is a clock value (`T080910`);
//! - a run right after a `W` designator is an ISO week (`W06`, `W065`);
//! - three digits after `.` or `,` may be a fraction of a second.
//!
//! Signs that follow a clock value start a UTC offset unit, and digits with
//! an ordinal suffix (`39th`) form one unit.

use crate::assigners::{assign_all, offset_len, Assigner};
use crate::error::GuessError;
use crate::lexer;
use crate::types::{ClassifiedToken, Lexeme, LexemeKind, Reading};

/// Clock assigner for each position in a colon or dot chain.
const CLOCK_SLOTS: [Assigner; 3] = [Assigner::Hour, Assigner::Minute, Assigner::Second];

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// The classified tokens of one input, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<ClassifiedToken>,
}

impl TokenSequence {
    /// Classify `input`. Fails when some non-separator part of it earns no
    /// candidate at all.
    pub fn build(input: &str) -> Result<Self, GuessError> {
        let lexemes = lexer::classify(input);
        let tokens = Builder {
            input,
            lexemes: &lexemes,
        }
        .build()?;
        Ok(Self { tokens })
    }

    #[must_use]
    pub fn tokens(&self) -> &[ClassifiedToken] {
        &self.tokens
    }

    /// Candidate lists of the field tokens, in order.
    pub fn fields(&self) -> impl Iterator<Item = &[Reading]> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            ClassifiedToken::Field { candidates, .. } => Some(candidates.as_slice()),
            ClassifiedToken::Literal { .. } => None,
        })
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields().count()
    }
}

struct Builder<'a> {
    input: &'a str,
    lexemes: &'a [Lexeme],
}

impl Builder<'_> {
    fn build(&self) -> Result<Vec<ClassifiedToken>, GuessError> {
        let mut tokens = Vec::with_capacity(self.lexemes.len());
        let mut i = 0;

        while i < self.lexemes.len() {
            let lexeme = &self.lexemes[i];

            if let Some(end) = self.offset_end(i) {
                let text = &self.input[lexeme.start..end];
                let readings = assign_all(text, LexemeKind::Symbol, &[Assigner::Offset]);
                tokens.push(field(text, lexeme.start, readings)?);
                while i < self.lexemes.len() && self.lexemes[i].end() <= end {
                    i += 1;
                }
                continue;
            }

            if let Some(suffix) = self.ordinal_suffix(i) {
                let text = &self.input[lexeme.start..suffix.end()];
                let readings = assign_all(text, LexemeKind::Numeric, Assigner::DATE);
                tokens.push(field(text, lexeme.start, readings)?);
                i += 2;
                continue;
            }

            let token = match lexeme.kind {
                LexemeKind::Whitespace | LexemeKind::Symbol => literal(lexeme),
                LexemeKind::Alpha if self.is_designator(i) => literal(lexeme),
                LexemeKind::Alpha => field(
                    &lexeme.raw,
                    lexeme.start,
                    assign_all(&lexeme.raw, LexemeKind::Alpha, Assigner::WORDS),
                )?,
                LexemeKind::Numeric => field(
                    &lexeme.raw,
                    lexeme.start,
                    assign_all(&lexeme.raw, LexemeKind::Numeric, &self.numeric_assigners(i)),
                )?,
            };
            tokens.push(token);
            i += 1;
        }

        Ok(tokens)
    }

    /// The lexeme `n` positions before `i`.
    fn before(&self, i: usize, n: usize) -> Option<&Lexeme> {
        i.checked_sub(n).and_then(|j| self.lexemes.get(j))
    }

    fn after(&self, i: usize, n: usize) -> Option<&Lexeme> {
        self.lexemes.get(i + n)
    }

    fn is_numeric(&self, i: usize) -> bool {
        self.lexemes
            .get(i)
            .is_some_and(|l| l.is(LexemeKind::Numeric))
    }

    /// Assigners a numeric lexeme may consult, given its neighbours.
    fn numeric_assigners(&self, i: usize) -> Vec<Assigner> {
        if self.after_designator(i, "W") {
            return vec![Assigner::Week];
        }
        if let Some(position) = self.chain_position(i, ":") {
            return CLOCK_SLOTS.get(position).copied().into_iter().collect();
        }
        if self.after_designator(i, "T") {
            return vec![Assigner::Hour];
        }

        let mut eligible = Assigner::DATE.to_vec();
        if let Some(position) = self.dot_clock_position(i) {
            eligible.push(CLOCK_SLOTS[position]);
        } else if self.is_standalone_hour(i) {
            eligible.push(Assigner::Hour);
        }
        if self.is_fraction(i) {
            eligible.push(Assigner::Fraction);
        }
        eligible
    }

    /// `T` between two numbers, or `W` before one.
    fn is_designator(&self, i: usize) -> bool {
        let lexeme = &self.lexemes[i];
        match lexeme.raw.as_str() {
            "T" => i > 0 && self.is_numeric(i - 1) && self.is_numeric(i + 1),
            "W" => self.is_numeric(i + 1),
            _ => false,
        }
    }

    fn after_designator(&self, i: usize, designator: &str) -> bool {
        i > 0 && self.lexemes[i - 1].raw == designator && self.is_designator(i - 1)
    }

    /// Position of lexeme `i` in a chain of numbers joined by `sep`, or
    /// `None` when it is not part of such a chain.
    fn chain_position(&self, i: usize, sep: &str) -> Option<usize> {
        let mut position = 0;
        let mut j = i;
        while j >= 2 && self.lexemes[j - 1].is_symbol(sep) && self.is_numeric(j - 2) {
            position += 1;
            j -= 2;
        }
        let continues = self.after(i, 1).is_some_and(|l| l.is_symbol(sep)) && self.is_numeric(i + 2);
        (position > 0 || continues).then_some(position)
    }

    /// Clock position of `i` inside a dot chain that could be a time.
    ///
    /// The whole chain must be two or three runs of one or two digits, not
    /// glued to a colon chain. A trailing three-digit run is a fraction and
    /// does not count against the chain.
    fn dot_clock_position(&self, i: usize) -> Option<usize> {
        let position = self.chain_position(i, ".")?;
        let start = i - 2 * position;
        let mut members = vec![start];
        let mut j = start;
        while self.after(j, 1).is_some_and(|l| l.is_symbol(".")) && self.is_numeric(j + 2) {
            j += 2;
            members.push(j);
        }

        let short = |m: &usize| self.lexemes[*m].raw.len() <= 2;
        if members.len() == 4 && self.lexemes[members[3]].raw.len() == 3 {
            members.pop();
        }
        if !(2..=3).contains(&members.len()) || !members.iter().all(short) || position >= members.len() {
            return None;
        }

        let glued = self.before(start, 1).is_some_and(|l| l.is_symbol(":"))
            || self.after(j, 1).is_some_and(|l| l.is_symbol(":"));
        (!glued).then_some(position)
    }

    /// A one or two digit run standing alone after whitespace, such as the
    /// `09` in `2013-02-08 09` or the `1` in `1 AM`. At the start of the
    /// input it needs a meridiem after it (`1AM`, `10 PM`).
    fn is_standalone_hour(&self, i: usize) -> bool {
        if self.lexemes[i].raw.len() > 2 {
            return false;
        }
        if i == 0 {
            return self.is_meridiem(1)
                || (self.after(i, 1).is_some_and(|l| l.is(LexemeKind::Whitespace))
                    && self.is_meridiem(2));
        }
        if !self.before(i, 1).is_some_and(|l| l.is(LexemeKind::Whitespace)) {
            return false;
        }
        match self.after(i, 1) {
            None => true,
            Some(next) => match next.kind {
                LexemeKind::Whitespace => true,
                LexemeKind::Alpha => next.raw == "Z" || self.is_meridiem(i + 1),
                LexemeKind::Symbol => self.offset_end(i + 1).is_some(),
                LexemeKind::Numeric => false,
            },
        }
    }

    fn is_meridiem(&self, i: usize) -> bool {
        self.lexemes
            .get(i)
            .filter(|l| l.is(LexemeKind::Alpha))
            .is_some_and(|l| !Assigner::Meridiem.assign(&l.raw, LexemeKind::Alpha).is_empty())
    }

    /// Three digits after `.` or `,` that follows a number.
    fn is_fraction(&self, i: usize) -> bool {
        self.lexemes[i].raw.len() == 3
            && self
                .before(i, 1)
                .is_some_and(|l| l.is_symbol(".") || l.is_symbol(","))
            && i >= 2
            && self.is_numeric(i - 2)
    }

    /// Whether numeric lexeme `i` sits where a clock value can.
    fn is_clock_value(&self, i: usize) -> bool {
        if !self.is_numeric(i) {
            return false;
        }
        self.chain_position(i, ":").is_some()
            || self.after_designator(i, "T")
            || (self.lexemes[i].raw.len() <= 2
                && self.before(i, 1).is_some_and(|l| l.is(LexemeKind::Whitespace)))
            || self.is_fraction(i)
    }

    /// End offset of a UTC offset starting at lexeme `i`.
    ///
    /// The sign must follow a clock value, directly or after whitespace.
    fn offset_end(&self, i: usize) -> Option<usize> {
        let lexeme = self.lexemes.get(i)?;
        if !(lexeme.is_symbol("+") || lexeme.is_symbol("-")) || i == 0 {
            return None;
        }
        let follows_clock = self.is_clock_value(i - 1)
            || (self.lexemes[i - 1].is(LexemeKind::Whitespace) && i >= 2 && self.is_clock_value(i - 2));
        if !follows_clock {
            return None;
        }
        offset_len(&self.input[lexeme.start..]).map(|len| lexeme.start + len)
    }

    /// The suffix lexeme when `i` is a number directly followed by
    /// `st`/`nd`/`rd`/`th`.
    fn ordinal_suffix(&self, i: usize) -> Option<&Lexeme> {
        if !self.is_numeric(i) {
            return None;
        }
        let next = self.after(i, 1)?;
        let lower = next.raw.to_lowercase();
        (next.is(LexemeKind::Alpha) && ORDINAL_SUFFIXES.contains(&lower.as_str())).then_some(next)
    }
}

fn literal(lexeme: &Lexeme) -> ClassifiedToken {
    ClassifiedToken::Literal {
        text: lexeme.raw.clone(),
        start: lexeme.start,
    }
}

fn field(text: &str, start: usize, candidates: Vec<Reading>) -> Result<ClassifiedToken, GuessError> {
    if candidates.is_empty() {
        tracing::debug!(text, start, "no assigner matched");
        return Err(GuessError::Unparseable);
    }
    Ok(ClassifiedToken::Field {
        text: text.to_string(),
        start,
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SemanticCode;
    use pretty_assertions::assert_eq;

    /// Codes offered per field, literals shown verbatim.
    fn layout(input: &str) -> Vec<String> {
        TokenSequence::build(input)
            .unwrap()
            .tokens()
            .iter()
            .map(|t| match t {
                ClassifiedToken::Literal { text, .. } => format!("'{text}'"),
                ClassifiedToken::Field { candidates, .. } => {
                    let codes: Vec<String> = candidates
                        .iter()
                        .map(|r| {
                            r.parts
                                .iter()
                                .map(|p| format!("{:?}", p.code))
                                .collect::<Vec<_>>()
                                .join("+")
                        })
                        .collect();
                    codes.join("|")
                }
            })
            .collect()
    }

    fn offers(input: &str, field_index: usize, code: SemanticCode) -> bool {
        let seq = TokenSequence::build(input).unwrap();
        let field = seq.fields().nth(field_index).unwrap();
        field.iter().any(|r| r.parts.iter().any(|p| p.code == code))
    }

    #[test]
    fn test_dash_date_has_no_clock_candidates() {
        assert_eq!(
            layout("2020-10-10"),
            vec![
                "FullYear",
                "'-'",
                "ShortYear|Month|Day",
                "'-'",
                "ShortYear|Month|Day",
            ]
        );
    }

    #[test]
    fn test_colon_chain_is_clock_only() {
        assert_eq!(
            layout("10:30:15"),
            vec!["Hour24|Hour12", "':'", "Minute", "':'", "Second"]
        );
    }

    #[test]
    fn test_dot_chain_offers_clock() {
        assert!(offers("01.02.03", 0, SemanticCode::Hour24));
        assert!(offers("01.02.03", 1, SemanticCode::Minute));
        assert!(offers("01.02.03", 2, SemanticCode::Second));
        assert!(offers("01.02.03", 2, SemanticCode::ShortYear));
        // A four digit year breaks the chain
        assert!(!offers("2020.01.01", 1, SemanticCode::Hour24));
        assert!(!offers("2020.01.01", 2, SemanticCode::Minute));
    }

    #[test]
    fn test_slash_chain_has_no_clock() {
        assert!(!offers("01/02/03", 0, SemanticCode::Hour24));
        assert!(!offers("01/02/03", 1, SemanticCode::Minute));
    }

    #[test]
    fn test_standalone_hour() {
        assert!(offers("2013-02-08 09", 3, SemanticCode::Hour24));
        assert!(offers("2020/01/01 1AM IST", 3, SemanticCode::Hour12Unpadded));
        // Followed by a comma, so not an hour
        assert!(!offers("Jan 13, 2020", 1, SemanticCode::Hour24));
    }

    #[test]
    fn test_leading_hour_needs_meridiem() {
        assert!(offers("1AM", 0, SemanticCode::Hour12Unpadded));
        assert!(offers("10 PM", 0, SemanticCode::Hour12));
        assert!(offers("10 pm IST", 0, SemanticCode::Hour24));
        assert!(!offers("10 2020", 0, SemanticCode::Hour24));
        assert!(!offers("10/01", 0, SemanticCode::Hour24));
    }

    #[test]
    fn test_time_designator_and_compact_time() {
        assert_eq!(
            layout("20130208T0809"),
            vec!["FullYear+Month+Day", "'T'", "Hour24+Minute"]
        );
    }

    #[test]
    fn test_week_designator() {
        assert_eq!(
            layout("2013W065"),
            vec!["FullYear", "'W'", "WeekOfYear+Weekday"]
        );
        assert_eq!(layout("2013-W06-5")[3], "WeekOfYear");
    }

    #[test]
    fn test_offset_units() {
        let seq = TokenSequence::build("2013-02-08 09+07:00").unwrap();
        let last = seq.tokens().last().unwrap();
        assert_eq!(last.text(), "+07:00");
        assert_eq!(last.start(), 13);
        assert_eq!(
            last.candidates(),
            &[Reading::single(SemanticCode::TimezoneOffsetColon, None)]
        );

        let seq = TokenSequence::build("20130208T09-0100").unwrap();
        assert_eq!(seq.tokens().last().unwrap().text(), "-0100");
    }

    #[test]
    fn test_date_dashes_are_not_offsets() {
        let seq = TokenSequence::build("Mon 2013-02-08").unwrap();
        assert!(seq.tokens().iter().all(|t| t.text() != "-02"));
        assert_eq!(seq.field_count(), 4);
    }

    #[test]
    fn test_fraction_after_seconds() {
        assert!(offers("09:30:26.123", 3, SemanticCode::Millisecond));
        assert!(offers("09:30:26,123", 3, SemanticCode::Millisecond));
    }

    #[test]
    fn test_ordinal_unit() {
        assert_eq!(
            layout("Jan 1st"),
            vec!["MonthShort", "' '", "DayOrdinal|DayOfYearOrdinal"]
        );
    }

    #[test]
    fn test_unknown_word_fails() {
        assert_eq!(
            TokenSequence::build("2020-01-01 foo"),
            Err(GuessError::Unparseable)
        );
    }

    #[test]
    fn test_empty_input_has_no_tokens() {
        assert_eq!(TokenSequence::build("").unwrap().field_count(), 0);
    }
}
