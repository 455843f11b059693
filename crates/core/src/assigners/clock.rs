//! Clock families: hour, minute, second, fraction, meridiem.
//!
//! Which of these a numeric run is offered depends on where it sits (colon
//! chains, the `T` designator, a standalone hour before `AM`), which the
//! sequence builder decides. The rules here only test shape.

use super::Rule;
use crate::types::SemanticCode::*;

pub(super) fn hour_rules() -> Vec<Rule> {
    vec![
        Rule::digits(r"^\d{2}$", &[Hour24]),
        Rule::digits(r"^\d{2}$", &[Hour12]),
        Rule::digits(r"^\d$", &[Hour24Unpadded]),
        Rule::digits(r"^\d$", &[Hour12Unpadded]),
        // Basic format after `T`: HHmmss and HHmm
        Rule::digits(r"^(\d{2})(\d{2})(\d{2})$", &[Hour24, Minute, Second]),
        Rule::digits(r"^(\d{2})(\d{2})$", &[Hour24, Minute]),
    ]
}

pub(super) fn minute_rules() -> Vec<Rule> {
    vec![Rule::digits(r"^\d{2}$", &[Minute])]
}

pub(super) fn second_rules() -> Vec<Rule> {
    vec![Rule::digits(r"^\d{2}$", &[Second])]
}

pub(super) fn fraction_rules() -> Vec<Rule> {
    vec![Rule::digits(r"^\d{3}$", &[Millisecond])]
}

pub(super) fn meridiem_rules() -> Vec<Rule> {
    vec![
        Rule::word(r"^[ap]m$", &[MeridiemLower]),
        Rule::word(r"^(?:[AP][Mm]|[ap]M)$", &[Meridiem]),
    ]
}
