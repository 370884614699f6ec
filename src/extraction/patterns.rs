//! Compiled cue patterns and the limits applied to what they capture.
//!
//! Every list here is tried in order; callers rely on that order for
//! precedence, so new patterns go at the end unless precedence should change.

use lazy_static::lazy_static;
use regex::Regex;

/// Longest accepted name, in characters
pub const NAME_MAX_CHARS: usize = 50;

/// Minimum whitespace-separated tokens in an accepted name
pub const NAME_MIN_TOKENS: usize = 2;

/// A paragraph must be longer than this (collapsed) to count as experience
pub const EXPERIENCE_MIN_CHARS: usize = 30;

/// Experience descriptions are cut to this many characters
pub const DESCRIPTION_MAX_CHARS: usize = 500;

pub const MAX_EXPERIENCE_ENTRIES: usize = 5;

/// Achievements must be longer than this after trimming
pub const ACHIEVEMENT_MIN_CHARS: usize = 10;

pub const MAX_ACHIEVEMENTS: usize = 5;

/// Length of the raw text preview before the `...` marker
pub const RAW_TEXT_PREVIEW_CHARS: usize = 500;

/// Words that mark a bullet as a measurable result
pub static IMPACT_WORDS: &[&str] = &[
    "increased",
    "decreased",
    "improved",
    "reduced",
    "achieved",
    "won",
];

lazy_static! {
    /// Name candidates, highest precedence first:
    /// labelled name, capitalized run at the start of the text, a short letters-only line.
    pub static ref NAME_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)name:?\s*([A-Za-z \t]{2,50})").unwrap(),
        Regex::new(r"^([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2})").unwrap(),
        Regex::new(r"(?:^|\n)([A-Za-z \t]{2,50})[ \t]*\r?(?:\n|$)").unwrap(),
    ];

    pub static ref EMAIL: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();

    /// Phone layouts: 555-123-4567, +44 20 7946 0958, (555) 123-4567
    pub static ref PHONE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\b[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}\b").unwrap(),
        Regex::new(r"\+[0-9]{1,3}[-\s]?[0-9]{1,4}[-\s]?[0-9]{1,4}[-\s]?[0-9]{1,4}\b").unwrap(),
        Regex::new(r"\([0-9]{3}\)\s*[0-9]{3}[-.]?[0-9]{4}").unwrap(),
    ];

    /// Blank-line paragraph separator
    pub static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n{2,}").unwrap();

    /// "Jan 2020", "September-2019", "dec.2021"
    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"(?i)(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*[\s.-]+[0-9]{4}"
    )
    .unwrap();

    /// Achievement cues, applied in order. Group 1 is the achievement text.
    pub static ref ACHIEVEMENT_CUES: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:achievement|accomplishment|award|honor|recognition)s?[:\s]+(.*)").unwrap(),
        Regex::new(r"(?im)^[ \t•-]*(?:won|achieved|earned|received|awarded)+(.*)$").unwrap(),
        Regex::new(r"(?im)^[ \t•-]*(?:led|managed|developed|created|implemented)+(.*)$").unwrap(),
    ];

    /// Any bullet line; group 1 is the text after the bullet
    pub static ref BULLET_LINE: Regex = Regex::new(r"(?m)^[ \t]*[•-][ \t]*(.*)$").unwrap();
}
