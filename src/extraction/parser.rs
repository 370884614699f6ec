//! Orchestration of the individual extractors

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::extraction::achievements::collect_achievements;
use crate::extraction::model::ParsedResume;
use crate::extraction::patterns::RAW_TEXT_PREVIEW_CHARS;
use crate::extraction::skills::SkillMatcher;
use crate::extraction::vocabulary::Vocabulary;
use crate::extraction::{
    extract_email, extract_experience, extract_name, extract_phone, truncate_chars,
};
use log::debug;

/// Runs every extractor over one text and assembles a [`ParsedResume`].
///
/// Holds only immutable, precompiled state, so a single parser can be shared
/// across threads and reused for any number of documents.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    skills: SkillMatcher,
    impact_bullets: bool,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self {
            skills: SkillMatcher::builtin().clone(),
            impact_bullets: false,
        }
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parser with the configured vocabulary extensions and passes.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        let vocabulary = Vocabulary::builtin()
            .with_extras(&config.extra_technical_skills, &config.extra_soft_skills);

        Ok(Self {
            skills: SkillMatcher::new(vocabulary)?,
            impact_bullets: config.impact_bullets,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.skills.vocabulary()
    }

    /// Extract every field. Never fails; fields without a match stay empty.
    pub fn parse(&self, text: &str) -> ParsedResume {
        let parsed = ParsedResume {
            name: extract_name(text),
            email: extract_email(text),
            phone: extract_phone(text),
            skills: self.skills.find(text),
            experience: extract_experience(text),
            achievements: collect_achievements(text, self.impact_bullets),
            raw_text: raw_text_preview(text),
        };

        debug!(
            "Parsed {} chars: name={} email={} phone={} skills={} experience={} achievements={}",
            text.chars().count(),
            parsed.name.is_some(),
            parsed.email.is_some(),
            parsed.phone.is_some(),
            parsed.skills.len(),
            parsed.experience.len(),
            parsed.achievements.len()
        );

        parsed
    }
}

/// Parse `text` with the built-in vocabularies and cue patterns.
pub fn parse_resume(text: &str) -> ParsedResume {
    ResumeParser::default().parse(text)
}

/// First 500 characters, with `...` appended only when something was cut.
fn raw_text_preview(text: &str) -> String {
    let preview = truncate_chars(text, RAW_TEXT_PREVIEW_CHARS);
    if preview.len() < text.len() {
        format!("{}...", preview)
    } else {
        text.to_string()
    }
}
