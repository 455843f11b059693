//! Structural properties every guess must have, checked over a spread of
//! inputs rather than exact outputs.

use dateguess_core::{
    lexer, Guesser, LexemeKind, Notation, RoleFamily, SemanticCode, Template, TemplatePart,
    TokenSequence,
};

const INPUTS: &[&str] = &[
    "2020-01-01",
    "01/02/03",
    "01.02.03",
    "01.02.03 10.00 PDT",
    "2013-W06-5 09",
    "2013-039",
    "20130208T093026.123+07:00",
    "13-Jan-2020, 10:00 am IST",
    "2020/01/01 1AM IST",
    "Mon, 13 Jan 2020",
    "31/12",
    "12.31",
    "12.31.05",
    "Thu Jan 1 00:00:00 1970",
    "10:00 13/01/2020",
    "10 PM",
];

fn templates(input: &str) -> Vec<Template> {
    Guesser::new()
        .templates(input)
        .unwrap_or_else(|e| panic!("'{input}' failed: {e}"))
        .into_iter()
        .collect()
}

#[test]
fn test_guessing_is_deterministic() {
    let guesser = Guesser::new();
    for input in INPUTS {
        for notation in Notation::ALL {
            let first = guesser.guess(input, notation);
            let second = guesser.guess(input, notation);
            assert_eq!(first, second, "'{input}' in {notation}");
        }
    }
}

#[test]
fn test_literals_are_preserved() {
    for input in INPUTS {
        let separators: Vec<String> = lexer::classify(input)
            .into_iter()
            .filter(|l| matches!(l.kind, LexemeKind::Whitespace | LexemeKind::Symbol))
            .filter(|l| !l.is_symbol("+") && !l.is_symbol("-") && !l.is_symbol(":"))
            .map(|l| l.raw)
            .collect();

        for template in templates(input) {
            let literals: Vec<&str> = template.literals().collect();
            for sep in &separators {
                assert!(
                    literals.contains(&sep.as_str()),
                    "'{input}': separator '{sep}' missing from {template}"
                );
            }
        }
    }
}

#[test]
fn test_one_code_per_family() {
    for input in INPUTS {
        for template in templates(input) {
            for family in RoleFamily::ALL {
                let count = template.codes().filter(|c| c.family() == family).count();
                assert!(count <= 1, "'{input}': {family:?} used {count} times in {template}");
            }
        }
    }
}

#[test]
fn test_field_count_matches_template() {
    for input in INPUTS {
        let sequence = TokenSequence::build(input).unwrap();
        for template in templates(input) {
            // Compound readings add codes, never remove them
            assert!(template.codes().count() >= sequence.field_count(), "'{input}'");
        }
    }
}

#[test]
fn test_meridiem_pairs_with_twelve_hour() {
    for input in INPUTS {
        for template in templates(input) {
            let twelve = template.codes().any(SemanticCode::is_twelve_hour);
            let meridiem = template
                .codes()
                .any(|c| c.family() == RoleFamily::Meridiem);
            assert_eq!(twelve, meridiem, "'{input}': {template}");
        }
    }
}

#[test]
fn test_no_date_part_after_time_in_one_group() {
    for input in INPUTS {
        for template in templates(input) {
            let mut clock_seen = false;
            for part in &template.parts {
                let code = match part {
                    TemplatePart::Literal(text) => {
                        if text.chars().any(char::is_whitespace) {
                            clock_seen = false;
                        }
                        continue;
                    }
                    TemplatePart::Code(code) => code,
                };
                let family = code.family();
                if family.is_clock() {
                    clock_seen = true;
                }
                if matches!(
                    family,
                    RoleFamily::Year | RoleFamily::Month | RoleFamily::Day
                ) {
                    assert!(!clock_seen, "'{input}': date after time in {template}");
                }
            }
        }
    }
}
