#![warn(missing_docs)]

//! # bibid: bibliographic identifier helpers
//!
//! Validation, conversion, and cleanup of the identifiers library systems
//! compare and deduplicate: ISBN-10 and ISBN-13 book numbers, and Library of
//! Congress call numbers as they come out of catalog records.
//!
//! All operations are pure functions over their input. Nothing here does I/O
//! or holds shared state, so everything is safe to call from any thread.
//!
//! ## Quick Start
//!
//! ### ISBNs
//!
//! ```
//! use bibid::isbn::{self, ConversionMode};
//!
//! assert!(isbn::is_valid13("978-0-306-40615-7"));
//!
//! let isbn10 = isbn::convert_to10("9780306406157", ConversionMode::Strict)?;
//! assert_eq!(isbn10.as_str(), "0306406152");
//!
//! // Strict conversions refuse input that is already in the target format
//! assert!(isbn::convert_to10("0306406152", ConversionMode::Strict).is_err());
//! # Ok::<(), bibid::IdentifierError>(())
//! ```
//!
//! ### Call Numbers
//!
//! ```
//! use bibid::call_number;
//!
//! assert_eq!(call_number::clean("[QRT] HD1691 .S85 c.2"), "HD1691 .S85");
//! assert!(call_number::is_valid("$aHD1691 $b.S85"));
//! ```
//!
//! ## Modules
//!
//! - [`isbn`] - ISBN-10/ISBN-13 check digits, validation, and conversion
//! - [`call_number`] - Call-number cleanup, shape validation, and parser-backed normalization
//! - [`error`] - Error types and result type

pub mod call_number;
pub mod error;
pub mod isbn;

pub use call_number::{CallNumberNormalizer, CallNumberParser, HIGH_SORT_CHAR, LOW_SORT_CHAR};
pub use error::{IdentifierError, Result};
pub use isbn::{ConversionMode, Isbn10, Isbn13};
