//! Library of Congress call-number cleanup and normalization.
//!
//! Raw call numbers from catalog records carry noise that is not part of the
//! classification: subfield delimiters, a `[QRT]` shelving prefix, copy
//! numbers, e-book markers, and volume/issue/part/chapter enumeration.
//! [`clean`] strips all of it so the remainder can be handed to an LC
//! call-number parser.
//!
//! Parsing and sort-key generation are delegated to a [`CallNumberParser`]
//! implementation supplied by the caller; [`CallNumberNormalizer`] wires the
//! cleaner and the parser together.
//!
//! # Examples
//!
//! ```
//! use bibid::call_number;
//!
//! assert_eq!(
//!     call_number::clean("PR9199.3 .M3823 H35 2001 c.2"),
//!     "PR9199.3 .M3823 H35 2001"
//! );
//! assert!(call_number::is_valid("[QRT] HD1691 .S85"));
//! assert!(!call_number::is_valid("123ABC"));
//! ```

mod parser;
pub mod rules;

pub use parser::{CallNumberParser, HIGH_SORT_CHAR, LOW_SORT_CHAR};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{IdentifierError, Result};

lazy_static! {
    static ref CALL_NUMBER_SHAPE: Regex =
        Regex::new(r"(?i)^[A-Z][0-9A-Z\s\.]*$").expect("call number shape pattern is valid");
}

/// Strip non-classification noise from a raw call number.
///
/// The cleanup rules in [`rules::CLEAN_RULES`] run in order, then spaces and
/// commas are trimmed from both ends and dots from the end. A leading dot is
/// kept: it marks a sub-class fragment rather than a full class.
///
/// The pipeline is repeated until its output stops changing, so cleaning is
/// idempotent even when removing one suffix exposes another (`"X c1eb"`
/// becomes `"X c1"` and then `"X"`).
///
/// # Examples
///
/// ```
/// use bibid::call_number;
///
/// assert_eq!(call_number::clean("$aQA76.73 $b.R87 v.2"), "QA76.73 .R87");
/// assert_eq!(call_number::clean(".A1 v.2"), ".A1");
/// ```
#[must_use]
pub fn clean(raw: &str) -> String {
    let mut current = rules::apply_all(raw);
    loop {
        // Every rule that fires shortens the string, so this terminates.
        let next = rules::apply_all(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Loose shape check on a cleaned call number.
///
/// True when the cleaned text starts with a letter followed only by letters,
/// digits, whitespace, and dots. LC classification rules are not checked.
#[must_use]
pub fn is_valid(call_number: &str) -> bool {
    CALL_NUMBER_SHAPE.is_match(&clean(call_number))
}

/// Cleans call numbers and renders sort keys through a [`CallNumberParser`].
///
/// The padding character defaults to [`LOW_SORT_CHAR`].
#[derive(Debug, Clone)]
pub struct CallNumberNormalizer<P> {
    parser: P,
    sort_char: char,
}

impl<P: CallNumberParser> CallNumberNormalizer<P> {
    /// Create a normalizer padding with [`LOW_SORT_CHAR`].
    #[must_use]
    pub fn new(parser: P) -> Self {
        CallNumberNormalizer {
            parser,
            sort_char: LOW_SORT_CHAR,
        }
    }

    /// Use `sort_char` to pad variable-length components.
    #[must_use]
    pub fn with_sort_char(mut self, sort_char: char) -> Self {
        self.sort_char = sort_char;
        self
    }

    /// The padding character in use.
    #[must_use]
    pub fn sort_char(&self) -> char {
        self.sort_char
    }

    /// The underlying parser.
    #[must_use]
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Clean, validate, and normalize a full call number into a sort key.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::InvalidCallNumber`] if the cleaned text fails
    /// [`is_valid`], or the parser's error if it cannot parse the text.
    pub fn normalize(&self, raw: &str) -> Result<String> {
        let cleaned = clean(raw);
        if !CALL_NUMBER_SHAPE.is_match(&cleaned) {
            log::debug!("rejecting call number {raw:?} (cleaned to {cleaned:?})");
            return Err(IdentifierError::InvalidCallNumber(format!(
                "'{raw}' cleans to '{cleaned}', which is not a call number"
            )));
        }
        let parsed = self.parser.parse(cleaned.trim()).map_err(|err| {
            log::debug!("parser rejected call number {cleaned:?}: {err}");
            err
        })?;
        Ok(self
            .parser
            .normalize(&parsed, self.sort_char)
            .trim()
            .to_string())
    }

    /// Normalize the classification portion of a call number.
    ///
    /// The input is trimmed but not cleaned.
    ///
    /// # Errors
    ///
    /// Returns the parser's error if it cannot parse the text.
    pub fn normalize_class(&self, class: &str) -> Result<String> {
        let parsed = self.parser.parse(class.trim())?;
        Ok(self.parser.normalize_class(&parsed, self.sort_char))
    }
}

/// Normalize a full call number with `parser`.
///
/// `sort_char` defaults to [`LOW_SORT_CHAR`]. See
/// [`CallNumberNormalizer::normalize`].
///
/// # Errors
///
/// Returns [`IdentifierError::InvalidCallNumber`] for text that does not clean
/// to a call number, or the parser's error.
pub fn normalize<P: CallNumberParser>(parser: P, raw: &str, sort_char: Option<char>) -> Result<String> {
    CallNumberNormalizer::new(parser)
        .with_sort_char(sort_char.unwrap_or(LOW_SORT_CHAR))
        .normalize(raw)
}

/// Normalize the classification portion of a call number with `parser`.
///
/// `sort_char` defaults to [`LOW_SORT_CHAR`]. See
/// [`CallNumberNormalizer::normalize_class`].
///
/// # Errors
///
/// Returns the parser's error.
pub fn normalize_class<P: CallNumberParser>(
    parser: P,
    class: &str,
    sort_char: Option<char>,
) -> Result<String> {
    CallNumberNormalizer::new(parser)
        .with_sort_char(sort_char.unwrap_or(LOW_SORT_CHAR))
        .normalize_class(class)
}
