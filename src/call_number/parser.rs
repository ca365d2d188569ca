//! Seam for an external Library of Congress call-number parser.
//!
//! LC classification grammar lives outside this crate. Anything that can
//! parse a cleaned call number and render sort keys from the parsed form can
//! be plugged in by implementing [`CallNumberParser`].

use crate::error::Result;

/// Pads variable-length components so they sort before alphanumeric continuations.
pub const LOW_SORT_CHAR: char = ' ';

/// Pads variable-length components so they sort after alphanumeric continuations.
pub const HIGH_SORT_CHAR: char = '~';

/// A Library of Congress call-number parser and sort-key normalizer.
///
/// # Examples
///
/// ```
/// use bibid::call_number::CallNumberParser;
/// use bibid::{IdentifierError, Result};
///
/// /// Treats everything up to the first space as the class.
/// struct FirstWord;
///
/// impl CallNumberParser for FirstWord {
///     type Parsed = (String, String);
///
///     fn parse(&self, text: &str) -> Result<Self::Parsed> {
///         let (class, rest) = text.split_once(' ').unwrap_or((text, ""));
///         if class.is_empty() {
///             return Err(IdentifierError::Parse("no class".to_string()));
///         }
///         Ok((class.to_string(), rest.to_string()))
///     }
///
///     fn normalize(&self, parsed: &Self::Parsed, sort_char: char) -> String {
///         format!("{}{sort_char}{}", parsed.0, parsed.1)
///     }
///
///     fn normalize_class(&self, parsed: &Self::Parsed, _sort_char: char) -> String {
///         parsed.0.clone()
///     }
/// }
///
/// let parsed = FirstWord.parse("QA76 .A1").unwrap();
/// assert_eq!(FirstWord.normalize_class(&parsed, ' '), "QA76");
/// ```
pub trait CallNumberParser {
    /// The parser's structured form of a call number.
    type Parsed;

    /// Parse call-number text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::IdentifierError::Parse`] when the text is not a call number
    /// the parser understands.
    fn parse(&self, text: &str) -> Result<Self::Parsed>;

    /// Sortable key for the whole call number, padded with `sort_char`.
    fn normalize(&self, parsed: &Self::Parsed, sort_char: char) -> String;

    /// Sortable key for the classification portion only, padded with `sort_char`.
    fn normalize_class(&self, parsed: &Self::Parsed, sort_char: char) -> String;
}

impl<P: CallNumberParser + ?Sized> CallNumberParser for &P {
    type Parsed = P::Parsed;

    fn parse(&self, text: &str) -> Result<Self::Parsed> {
        (**self).parse(text)
    }

    fn normalize(&self, parsed: &Self::Parsed, sort_char: char) -> String {
        (**self).normalize(parsed, sort_char)
    }

    fn normalize_class(&self, parsed: &Self::Parsed, sort_char: char) -> String {
        (**self).normalize_class(parsed, sort_char)
    }
}
