//! Heuristic field extraction from resume text
//!
//! Each extractor is a pure function over the full text; none reads another's
//! output. [`parser::ResumeParser`] runs them all and assembles the record.

pub mod achievements;
pub mod contact;
pub mod experience;
pub mod model;
pub mod name;
pub mod parser;
pub mod patterns;
pub mod skills;
pub mod vocabulary;

pub use achievements::extract_achievements;
pub use contact::{extract_email, extract_phone};
pub use experience::extract_experience;
pub use model::{ExperienceEntry, ParsedResume, SkillSet};
pub use name::extract_name;
pub use parser::{parse_resume, ResumeParser};
pub use skills::{extract_skills, SkillMatcher};
pub use vocabulary::Vocabulary;

/// Collapse every whitespace run to one space and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a\n\tb   c \r\n"), "a b c");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("héllo", 5), "héllo");
        assert_eq!(truncate_chars("héllo", 50), "héllo");
        assert_eq!(truncate_chars("", 3), "");
    }
}
