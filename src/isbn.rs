//! ISBN-10 and ISBN-13 check digits, validation, and conversion.
//!
//! An ISBN-13 is the prefix `978`, the first nine digits of the matching
//! ISBN-10, and a freshly computed ISBN-13 check digit. Converting between the
//! two formats therefore means extracting the nine shared digits and computing
//! the other format's check character; check digits are never transformed
//! arithmetically.
//!
//! Hyphens are formatting only and are removed before anything else happens.
//! Every function here is total: bad input comes back as an
//! [`IdentifierError`], never as a panic.
//!
//! # Examples
//!
//! ```
//! use bibid::isbn::{self, ConversionMode};
//!
//! assert!(isbn::is_valid10("0-306-40615-2"));
//! assert_eq!(isbn::checksum10("020161622").unwrap(), 'X');
//!
//! let isbn13 = isbn::convert_to13("0306406152", ConversionMode::Strict).unwrap();
//! assert_eq!(isbn13.as_str(), "9780306406157");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IdentifierError, Result};

/// Prefix every ISBN-13 handled by this module starts with.
pub const ISBN13_PREFIX: &str = "978";

/// How a conversion treats input that is already in the target format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    /// Fail unless the input is valid in the source format.
    Strict,
    /// Pass an input that is already valid in the target format through unchanged (default)
    #[default]
    Lenient,
}

/// Remove formatting hyphens from an ISBN.
///
/// # Examples
///
/// ```
/// use bibid::isbn;
///
/// assert_eq!(isbn::normalize("978-0-306-40615-7"), "9780306406157");
/// assert_eq!(isbn::normalize("0-306-40615-2"), "0306406152");
/// ```
#[must_use]
pub fn normalize(isbn: &str) -> String {
    isbn.replace('-', "")
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Digits throughout, except that the final character may be `X` or `x`.
fn has_isbn10_shape(s: &str) -> bool {
    match s.as_bytes().split_last() {
        Some((last, body)) => {
            body.iter().all(u8::is_ascii_digit)
                && (last.is_ascii_digit() || last.eq_ignore_ascii_case(&b'X'))
        },
        None => false,
    }
}

fn digit_char(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('0')
}

/// ISBN-10 check character of exactly nine ASCII digits.
fn compute_check10(body: &str) -> char {
    debug_assert!(body.len() == 9 && is_digits(body));
    let sum: u32 = body
        .bytes()
        .zip(1u32..)
        .map(|(b, weight)| weight * u32::from(b - b'0'))
        .sum();
    match sum % 11 {
        10 => 'X',
        rem => digit_char(rem),
    }
}

/// ISBN-13 check digit of exactly twelve ASCII digits.
fn compute_check13(body: &str) -> char {
    debug_assert!(body.len() == 12 && is_digits(body));
    let sum: u32 = body
        .bytes()
        .zip([1u32, 3].iter().cycle())
        .map(|(b, weight)| weight * u32::from(b - b'0'))
        .sum();
    digit_char((10 - sum % 10) % 10)
}

/// Check character for one to nine digits, zero-padded on the left to nine.
fn check10_of(body: &str) -> Result<char> {
    if body.len() > 9 || !is_digits(body) {
        return Err(IdentifierError::InvalidFormat(format!(
            "'{body}' is not a sequence of at most 9 digits"
        )));
    }
    Ok(compute_check10(&format!("{body:0>9}")))
}

/// Check digit for a twelve-digit body starting with `978`.
fn check13_of(body: &str) -> Result<char> {
    if body.len() != 12 || !is_digits(body) || !body.starts_with(ISBN13_PREFIX) {
        return Err(IdentifierError::InvalidFormat(format!(
            "'{body}' is not 12 digits starting with {ISBN13_PREFIX}"
        )));
    }
    Ok(compute_check13(body))
}

/// Validate a hyphen-free ISBN-10 and return its trailing check character.
fn verify10(isbn: &str) -> Result<char> {
    if !(2..=10).contains(&isbn.len()) || !has_isbn10_shape(isbn) {
        return Err(IdentifierError::InvalidFormat(format!(
            "'{isbn}' is not 2 to 10 digits with an optional trailing X"
        )));
    }
    let (body, check) = isbn.split_at(isbn.len() - 1);
    let expected = check10_of(body)?;
    let actual = check.chars().next().unwrap_or_default();
    if actual.eq_ignore_ascii_case(&expected) {
        Ok(actual)
    } else {
        Err(IdentifierError::ChecksumMismatch(format!(
            "'{isbn}' ends in '{actual}', expected '{expected}'"
        )))
    }
}

/// Validate a hyphen-free ISBN-13 and return its trailing check digit.
fn verify13(isbn: &str) -> Result<char> {
    if isbn.len() != 13 || !is_digits(isbn) || !isbn.starts_with(ISBN13_PREFIX) {
        return Err(IdentifierError::InvalidFormat(format!(
            "'{isbn}' is not 13 digits starting with {ISBN13_PREFIX}"
        )));
    }
    let (body, check) = isbn.split_at(12);
    let expected = compute_check13(body);
    let actual = check.chars().next().unwrap_or_default();
    if actual == expected {
        Ok(actual)
    } else {
        Err(IdentifierError::ChecksumMismatch(format!(
            "'{isbn}' ends in '{actual}', expected '{expected}'"
        )))
    }
}

/// Compute or extract an ISBN-10 check character.
///
/// Inputs of one to nine digits are left-padded with zeros to nine digits and
/// the check character is computed: each digit is weighted by its 1-based
/// position, and the sum modulo 11 is the check value, with 10 written as `X`.
///
/// A ten-character input is treated as a complete ISBN-10: its own trailing
/// character is returned if the whole ISBN is valid.
///
/// # Errors
///
/// Returns [`IdentifierError::InvalidFormat`] for empty input, input longer
/// than ten characters, or any non-digit other than a final `X`, and
/// [`IdentifierError::ChecksumMismatch`] for a ten-character input whose check
/// character is wrong.
///
/// # Examples
///
/// ```
/// use bibid::isbn;
///
/// assert_eq!(isbn::checksum10("030640615").unwrap(), '2');
/// assert_eq!(isbn::checksum10("020161622").unwrap(), 'X');
/// assert_eq!(isbn::checksum10("0306406152").unwrap(), '2');
/// assert!(isbn::checksum10("0306406153").is_err());
/// ```
pub fn checksum10(isbn: &str) -> Result<char> {
    let isbn = normalize(isbn);
    match isbn.len() {
        0 => Err(IdentifierError::InvalidFormat(
            "empty ISBN-10 body".to_string(),
        )),
        10 => verify10(&isbn),
        len if len > 10 => Err(IdentifierError::InvalidFormat(format!(
            "'{isbn}' is longer than an ISBN-10"
        ))),
        _ => check10_of(&isbn),
    }
}

/// Compute or extract an ISBN-13 check digit.
///
/// A twelve-digit input starting with `978` gets its check digit computed:
/// digits are weighted 1, 3, 1, 3, ... and the check digit is
/// `(10 - sum % 10) % 10`. A thirteen-digit input is treated as a complete
/// ISBN-13 and its own trailing digit is returned if the whole ISBN is valid.
///
/// # Errors
///
/// Returns [`IdentifierError::InvalidFormat`] unless the input is 12 or 13
/// digits starting with `978`, and [`IdentifierError::ChecksumMismatch`] for
/// a thirteen-digit input whose check digit is wrong.
///
/// # Examples
///
/// ```
/// use bibid::isbn;
///
/// assert_eq!(isbn::checksum13("978030640615").unwrap(), '7');
/// assert_eq!(isbn::checksum13("978-0-306-40615-7").unwrap(), '7');
/// assert!(isbn::checksum13("979030640615").is_err());
/// ```
pub fn checksum13(isbn: &str) -> Result<char> {
    let isbn = normalize(isbn);
    match isbn.len() {
        12 => check13_of(&isbn),
        13 => verify13(&isbn),
        _ => Err(IdentifierError::InvalidFormat(format!(
            "'{isbn}' is neither 12 nor 13 digits"
        ))),
    }
}

/// Validate an ISBN-10 for format and check character.
///
/// Short ISBN-10s (fewer than nine body digits) are accepted, as if padded
/// with leading zeros. The `X` check character is case-insensitive.
///
/// # Examples
///
/// ```
/// use bibid::isbn;
///
/// assert!(isbn::is_valid10("0306406152"));
/// assert!(isbn::is_valid10("0-201-61622-X"));
/// assert!(!isbn::is_valid10("0306406153"));
/// ```
#[must_use]
pub fn is_valid10(isbn: &str) -> bool {
    verify10(&normalize(isbn)).is_ok()
}

/// Validate an ISBN-13 for format, `978` prefix, and check digit.
///
/// # Examples
///
/// ```
/// use bibid::isbn;
///
/// assert!(isbn::is_valid13("9780306406157"));
/// assert!(!isbn::is_valid13("9780306406158"));
/// ```
#[must_use]
pub fn is_valid13(isbn: &str) -> bool {
    verify13(&normalize(isbn)).is_ok()
}

/// Validate an ISBN of either format.
///
/// # Examples
///
/// ```
/// use bibid::isbn;
///
/// assert!(isbn::is_valid("0306406152")); // ISBN-10
/// assert!(isbn::is_valid("9780306406157")); // ISBN-13
/// assert!(!isbn::is_valid("123"));
/// ```
#[must_use]
pub fn is_valid(isbn: &str) -> bool {
    is_valid10(isbn) || is_valid13(isbn)
}

/// Convert an ISBN-13 to an ISBN-10.
///
/// The nine digits after the `978` prefix become the ISBN-10 body and a new
/// ISBN-10 check character is computed. In [`ConversionMode::Lenient`] an
/// input that is already a valid ISBN-10 is returned as is, minus hyphens.
///
/// # Errors
///
/// Returns [`IdentifierError::UnexpectedFormat`] when a strict conversion is
/// given a valid ISBN-10, and the validation error otherwise.
///
/// # Examples
///
/// ```
/// use bibid::isbn::{self, ConversionMode};
///
/// let isbn10 = isbn::convert_to10("9780306406157", ConversionMode::Strict).unwrap();
/// assert_eq!(isbn10.as_str(), "0306406152");
///
/// assert!(isbn::convert_to10("0306406152", ConversionMode::Strict).is_err());
/// assert!(isbn::convert_to10("0306406152", ConversionMode::Lenient).is_ok());
/// ```
pub fn convert_to10(isbn: &str, mode: ConversionMode) -> Result<Isbn10> {
    let normalized = normalize(isbn);
    match verify13(&normalized) {
        Ok(_) => Ok(isbn10_from_valid13(&normalized)),
        Err(err13) => match (mode, verify10(&normalized)) {
            (ConversionMode::Lenient, Ok(_)) => {
                log::trace!("'{normalized}' is already an ISBN-10, passing through");
                Ok(Isbn10::from_valid(normalized))
            },
            (ConversionMode::Strict, Ok(_)) => Err(IdentifierError::UnexpectedFormat(format!(
                "'{normalized}' is already an ISBN-10"
            ))),
            (ConversionMode::Lenient, Err(err10)) if normalized.len() != 13 => Err(err10),
            _ => Err(err13),
        },
    }
}

/// Convert an ISBN-10 to an ISBN-13.
///
/// The ISBN-10 is zero-padded to ten characters, its first nine digits are
/// prefixed with `978`, and a new ISBN-13 check digit is appended. In
/// [`ConversionMode::Lenient`] an input that is already a valid ISBN-13 is
/// returned as is, minus hyphens.
///
/// # Errors
///
/// Returns [`IdentifierError::UnexpectedFormat`] when a strict conversion is
/// given a valid ISBN-13, and the validation error otherwise.
///
/// # Examples
///
/// ```
/// use bibid::isbn::{self, ConversionMode};
///
/// let isbn13 = isbn::convert_to13("0-201-61622-X", ConversionMode::Strict).unwrap();
/// assert_eq!(isbn13.as_str(), "9780201616224");
///
/// // Short ISBN-10s are padded before conversion
/// let isbn13 = isbn::convert_to13("78", ConversionMode::Lenient).unwrap();
/// assert_eq!(isbn13.as_str(), "9780000000071");
/// ```
pub fn convert_to13(isbn: &str, mode: ConversionMode) -> Result<Isbn13> {
    let normalized = normalize(isbn);
    match verify10(&normalized) {
        Ok(_) => Ok(isbn13_from_valid10(&normalized)),
        Err(err10) => match (mode, verify13(&normalized)) {
            (ConversionMode::Lenient, Ok(_)) => {
                log::trace!("'{normalized}' is already an ISBN-13, passing through");
                Ok(Isbn13(normalized))
            },
            (ConversionMode::Strict, Ok(_)) => Err(IdentifierError::UnexpectedFormat(format!(
                "'{normalized}' is already an ISBN-13"
            ))),
            (ConversionMode::Lenient, Err(err13)) if normalized.len() == 13 => Err(err13),
            _ => Err(err10),
        },
    }
}

/// Zero-pad a short ISBN-10 to the full ten characters.
///
/// The check character is written in its canonical upper-case form.
///
/// # Errors
///
/// Returns the validation error if the input is not a valid ISBN-10.
///
/// # Examples
///
/// ```
/// use bibid::isbn;
///
/// assert_eq!(isbn::patch10("78").unwrap().as_str(), "0000000078");
/// assert_eq!(isbn::patch10("0306406152").unwrap().as_str(), "0306406152");
/// assert!(isbn::patch10("79").is_err());
/// ```
pub fn patch10(isbn: &str) -> Result<Isbn10> {
    let normalized = normalize(isbn);
    verify10(&normalized)?;
    Ok(Isbn10::from_valid(format!("{normalized:0>10}")))
}

/// The argument must already have passed `verify13`.
fn isbn10_from_valid13(isbn13: &str) -> Isbn10 {
    let body = &isbn13[ISBN13_PREFIX.len()..12];
    Isbn10(format!("{body}{}", compute_check10(body)))
}

fn isbn13_from_valid10(isbn10: &str) -> Isbn13 {
    let padded = format!("{isbn10:0>10}");
    let body = format!("{ISBN13_PREFIX}{}", &padded[..9]);
    let check = compute_check13(&body);
    Isbn13(format!("{body}{check}"))
}

/// A valid ISBN-10 without hyphens.
///
/// The value may be shorter than ten characters when it came from a short
/// ISBN-10; [`Isbn10::patched`] gives the zero-padded form. A lower-case `x`
/// check character is stored as `X`.
///
/// # Examples
///
/// ```
/// use bibid::isbn::Isbn10;
///
/// let isbn: Isbn10 = "0-201-61622-x".parse().unwrap();
/// assert_eq!(isbn.as_str(), "020161622X");
/// assert_eq!(isbn.check_char(), 'X');
/// assert_eq!(isbn.to_isbn13().as_str(), "9780201616224");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn10(String);

impl Isbn10 {
    fn from_valid(mut isbn: String) -> Self {
        isbn.make_ascii_uppercase();
        Isbn10(isbn)
    }

    /// The ISBN as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing check character (`0`-`9` or `X`).
    #[must_use]
    pub fn check_char(&self) -> char {
        self.0.chars().last().unwrap_or_default()
    }

    /// The ISBN zero-padded to ten characters.
    #[must_use]
    pub fn patched(&self) -> Isbn10 {
        Isbn10(format!("{:0>10}", self.0))
    }

    /// The equivalent ISBN-13.
    #[must_use]
    pub fn to_isbn13(&self) -> Isbn13 {
        isbn13_from_valid10(&self.0)
    }
}

impl FromStr for Isbn10 {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s);
        verify10(&normalized)?;
        Ok(Isbn10::from_valid(normalized))
    }
}

impl TryFrom<String> for Isbn10 {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Isbn10> for String {
    fn from(isbn: Isbn10) -> Self {
        isbn.0
    }
}

impl AsRef<str> for Isbn10 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A valid `978`-prefixed ISBN-13 without hyphens.
///
/// # Examples
///
/// ```
/// use bibid::isbn::Isbn13;
///
/// let isbn: Isbn13 = "978-0-306-40615-7".parse().unwrap();
/// assert_eq!(isbn.as_str(), "9780306406157");
/// assert_eq!(isbn.to_isbn10().as_str(), "0306406152");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn13(String);

impl Isbn13 {
    /// The ISBN as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing check digit.
    #[must_use]
    pub fn check_digit(&self) -> char {
        self.0.chars().last().unwrap_or_default()
    }

    /// The equivalent ten-character ISBN-10.
    #[must_use]
    pub fn to_isbn10(&self) -> Isbn10 {
        isbn10_from_valid13(&self.0)
    }
}

impl FromStr for Isbn13 {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s);
        verify13(&normalized)?;
        Ok(Isbn13(normalized))
    }
}

impl TryFrom<String> for Isbn13 {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Isbn13> for String {
    fn from(isbn: Isbn13) -> Self {
        isbn.0
    }
}

impl AsRef<str> for Isbn13 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
