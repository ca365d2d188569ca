//! Integration tests for call-number cleaning and parser-backed normalization.
//!
//! `StubParser` stands in for a real LC classification parser: it splits the
//! leading letters (the class) from the following class number and keeps the
//! rest verbatim.

use std::cell::RefCell;

use bibid::call_number::{self, CallNumberNormalizer, CallNumberParser};
use bibid::{IdentifierError, Result, HIGH_SORT_CHAR, LOW_SORT_CHAR};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Parsed {
    letters: String,
    number: String,
    rest: String,
}

#[derive(Debug, Default)]
struct StubParser {
    seen: RefCell<Vec<String>>,
}

fn pad(text: &str, width: usize, fill: char) -> String {
    let mut out = text.to_string();
    while out.chars().count() < width {
        out.push(fill);
    }
    out
}

impl CallNumberParser for StubParser {
    type Parsed = Parsed;

    fn parse(&self, text: &str) -> Result<Parsed> {
        self.seen.borrow_mut().push(text.to_string());
        let letters: String = text.chars().take_while(char::is_ascii_alphabetic).collect();
        if letters.is_empty() {
            return Err(IdentifierError::Parse(format!("no class letters in '{text}'")));
        }
        let tail = &text[letters.len()..];
        let number: String = tail
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let rest = tail[number.len()..].trim().to_string();
        Ok(Parsed {
            letters,
            number,
            rest,
        })
    }

    fn normalize(&self, parsed: &Parsed, sort_char: char) -> String {
        format!(
            "{} {}",
            self.normalize_class(parsed, sort_char),
            parsed.rest
        )
    }

    fn normalize_class(&self, parsed: &Parsed, sort_char: char) -> String {
        format!("{}{}", pad(&parsed.letters, 3, sort_char), parsed.number)
    }
}

#[test]
fn test_clean_examples() {
    assert_eq!(
        call_number::clean("PR9199.3 .M3823 H35 2001 c.2"),
        "PR9199.3 .M3823 H35 2001"
    );
    assert_eq!(call_number::clean(".A1 v.2"), ".A1");
    assert_eq!(call_number::clean("[QRT] HD1691 .S85"), "HD1691 .S85");
    assert_eq!(
        call_number::clean("$aML410.B4 $bA4 1990 c.1"),
        "ML410.B4 A4 1990"
    );
}

#[test]
fn test_is_valid_examples() {
    assert!(call_number::is_valid("[QRT] HD1691 .S85"));
    assert!(!call_number::is_valid("123ABC"));
    assert!(!call_number::is_valid("   "));
}

#[test]
fn test_normalize_cleans_before_parsing() {
    let normalizer = CallNumberNormalizer::new(StubParser::default());
    let key = normalizer.normalize("[QRT] HD1691 .S85 c.2").unwrap();
    assert_eq!(key, "HD 1691 .S85");
    assert_eq!(normalizer.parser().seen.borrow().as_slice(), ["HD1691 .S85"]);
}

#[test]
fn test_normalize_uses_sort_char() {
    let normalizer = CallNumberNormalizer::new(StubParser::default()).with_sort_char(HIGH_SORT_CHAR);
    assert_eq!(normalizer.sort_char(), '~');
    assert_eq!(normalizer.normalize("HD1691 .S85").unwrap(), "HD~1691 .S85");
}

#[test]
fn test_normalize_defaults_to_low_sort_char() {
    let normalizer = CallNumberNormalizer::new(StubParser::default());
    assert_eq!(normalizer.sort_char(), LOW_SORT_CHAR);
}

#[test]
fn test_normalize_trims_parser_output() {
    let parser = StubParser::default();
    // "Q" pads to "Q  " and has no rest, leaving trailing spaces to trim
    assert_eq!(call_number::normalize(&parser, "Q", None).unwrap(), "Q");
}

#[test]
fn test_normalize_rejects_invalid_shape_without_parsing() {
    let parser = StubParser::default();
    let err = call_number::normalize(&parser, "123ABC", None).unwrap_err();
    assert!(matches!(err, IdentifierError::InvalidCallNumber(_)));
    assert!(parser.seen.borrow().is_empty());
}

#[test]
fn test_normalize_class() {
    let parser = StubParser::default();
    assert_eq!(
        call_number::normalize_class(&parser, "  QA76.73 ", Some('~')).unwrap(),
        "QA~76.73"
    );
    assert_eq!(
        call_number::normalize_class(&parser, "QA76.73", None).unwrap(),
        "QA 76.73"
    );
}

#[test]
fn test_normalize_class_does_not_clean() {
    let parser = StubParser::default();
    call_number::normalize_class(&parser, "[QRT] QA76", None).unwrap_err();
    assert_eq!(parser.seen.borrow().as_slice(), ["[QRT] QA76"]);
}

#[test]
fn test_normalize_class_propagates_parse_error() {
    let parser = StubParser::default();
    let err = call_number::normalize_class(&parser, "123", None).unwrap_err();
    assert!(matches!(err, IdentifierError::Parse(_)));
}

proptest! {
    #[test]
    fn prop_clean_is_idempotent(raw in "\\PC{0,40}") {
        let once = call_number::clean(&raw);
        prop_assert_eq!(call_number::clean(&once), once);
    }

    #[test]
    fn prop_clean_is_idempotent_on_call_number_noise(
        raw in r"[A-Za-z0-9 .,\-$|ǂ\[\]]{0,40}",
    ) {
        let once = call_number::clean(&raw);
        prop_assert_eq!(call_number::clean(&once), once);
    }

    #[test]
    fn prop_clean_output_has_no_whitespace_runs_or_trailing_dot(raw in "\\PC{0,40}") {
        let cleaned = call_number::clean(&raw);
        prop_assert!(!cleaned.ends_with('.'));
        prop_assert!(!cleaned.ends_with(','));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        let chars: Vec<char> = cleaned.chars().collect();
        prop_assert!(!chars.windows(2).any(|w| w[0].is_whitespace() && w[1].is_whitespace()));
    }
}
