//! Vocabulary-based skill matching

use crate::error::{Result, ResumeParserError};
use crate::extraction::model::SkillSet;
use crate::extraction::vocabulary::Vocabulary;
use aho_corasick::AhoCorasick;
use lazy_static::lazy_static;

lazy_static! {
    static ref BUILTIN_MATCHER: SkillMatcher =
        SkillMatcher::new(Vocabulary::builtin()).expect("built-in vocabulary must compile");
}

/// Substring matcher over a fixed vocabulary.
///
/// All terms (technical first, then soft) go into one Aho-Corasick automaton
/// so the lower-cased text is scanned once regardless of vocabulary size.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    matcher: AhoCorasick,
    vocabulary: Vocabulary,
}

impl SkillMatcher {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        let patterns: Vec<String> = vocabulary
            .technical()
            .iter()
            .chain(vocabulary.soft())
            .map(|term| term.to_lowercase())
            .collect();

        let matcher = AhoCorasick::new(&patterns).map_err(|e| {
            ResumeParserError::Configuration(format!("Failed to build skill matcher: {}", e))
        })?;

        Ok(Self { matcher, vocabulary })
    }

    /// Matcher over the built-in vocabulary, compiled once per process
    pub fn builtin() -> &'static SkillMatcher {
        &BUILTIN_MATCHER
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Report every vocabulary term contained in `text`, ignoring case.
    ///
    /// No word boundaries: "java" is reported for "javascript".
    pub fn find(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        let mut present = vec![false; self.vocabulary.len()];
        for mat in self.matcher.find_overlapping_iter(lowered.as_str()) {
            present[mat.pattern().as_usize()] = true;
        }

        let (technical_hits, soft_hits) = present.split_at(self.vocabulary.technical().len());
        SkillSet {
            technical: select(self.vocabulary.technical(), technical_hits),
            soft: select(self.vocabulary.soft(), soft_hits),
        }
    }
}

fn select(terms: &[String], hits: &[bool]) -> Vec<String> {
    terms
        .iter()
        .zip(hits)
        .filter(|(_, hit)| **hit)
        .map(|(term, _)| term.clone())
        .collect()
}

/// Match `text` against the built-in vocabularies.
pub fn extract_skills(text: &str) -> SkillSet {
    SkillMatcher::builtin().find(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order_not_text_order() {
        let skills = extract_skills("I know Python and React and have great Leadership");
        assert_eq!(skills.technical, vec!["python", "react"]);
        assert_eq!(skills.soft, vec!["leadership"]);
    }

    #[test]
    fn test_substring_containment() {
        let skills = extract_skills("Built SPAs in JavaScript; some NoSQL (MongoDB).");
        assert_eq!(skills.technical, vec!["javascript", "java", "sql", "mongodb"]);
        assert!(skills.soft.is_empty());
    }

    #[test]
    fn test_multi_word_soft_skills() {
        let skills = extract_skills("Strong Problem Solving and\nTime Management; creative thinker");
        assert_eq!(skills.soft, vec!["problem solving", "time management", "creative"]);
    }

    #[test]
    fn test_reports_vocabulary_casing() {
        let vocabulary = Vocabulary::builtin().with_extras(&["GraphQL".to_string()], &[]);
        let matcher = SkillMatcher::new(vocabulary).unwrap();
        let skills = matcher.find("exposed a graphql gateway");
        assert_eq!(skills.technical, vec!["GraphQL"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_skills("").is_empty());
    }
}
