//! Ordered cleanup rules for raw call numbers.
//!
//! Each rule rewrites the output of the one before it. Later rules rely on
//! earlier ones having removed their noise first (the copy-number rule is
//! anchored at the end of the string, so it must run after subfield markers
//! are gone), so the table order is significant.

use lazy_static::lazy_static;
use regex::Regex;

/// A single regex rewrite in the cleanup pipeline.
#[derive(Debug)]
pub struct CleanRule {
    /// Short name used in trace logging
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
    /// Trim surrounding whitespace after the rewrite
    trim: bool,
}

impl CleanRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str, trim: bool) -> Self {
        CleanRule {
            name,
            pattern: Regex::new(pattern).expect("cleanup rule pattern is valid"),
            replacement,
            trim,
        }
    }

    /// Apply this rule to `input`.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        let replaced = self.pattern.replace_all(input, self.replacement);
        if self.trim {
            replaced.trim().to_string()
        } else {
            replaced.into_owned()
        }
    }
}

lazy_static! {
    /// The cleanup rules, in application order.
    pub static ref CLEAN_RULES: Vec<CleanRule> = vec![
        // $a, ǂa and |a subfield delimiters
        CleanRule::new("subfield", r"(?i)\$[a-z]|ǂ[a-z]|\|[a-z]", " ", true),
        CleanRule::new("prefix", r"(?i)^\[QRT\]\s?", "", true),
        // c1, c.2, c1-2, c.3-4
        CleanRule::new("copy", r"\sc[0-9\-]+$|\sc\.[0-9\-]+$", "", true),
        CleanRule::new("ebook", r"eb$", "", false),
        CleanRule::new("volume", r"v\.[0-9a-z\-\s]+", "", false),
        CleanRule::new("issue", r"no\.[0-9a-z\-\s]+", "", false),
        CleanRule::new("part", r"pt\.[0-9a-z\-\s]+", "", false),
        CleanRule::new("chapter", r"ch\.[0-9a-z\-\s]+", "", false),
        CleanRule::new("whitespace", r"\s{2,}", " ", false),
    ];
}

/// Trim the edges of a rewritten call number.
///
/// Spaces and commas come off both ends and dots off the end only. A leading
/// dot marks a sub-class fragment and stays.
#[must_use]
pub fn trim_edges(input: &str) -> &str {
    input
        .trim_matches([' ', ','])
        .trim_end_matches('.')
        .trim()
}

/// Run every rule once, in order, then trim the edges.
#[must_use]
pub fn apply_all(input: &str) -> String {
    let mut current = input.to_string();
    for rule in CLEAN_RULES.iter() {
        let next = rule.apply(&current);
        if next != current {
            log::trace!("call number rule '{}': {current:?} -> {next:?}", rule.name);
            current = next;
        }
    }
    trim_edges(&current).to_string()
}
