//! Result records produced by the extractors

use serde::{Deserialize, Serialize};

/// Skills found in the text, each list in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl SkillSet {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }

    pub fn len(&self) -> usize {
        self.technical.len() + self.soft.len()
    }
}

/// A dated paragraph that looks like a position or project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Date tokens in the order they appear in the paragraph
    pub dates: Vec<String>,
    /// Whitespace-collapsed paragraph text, at most 500 characters
    pub description: String,
}

/// Everything extracted from one resume text.
///
/// Serializes to the same JSON shape the upload endpoint has always returned:
/// `name`, `email`, `phone`, `skills{technical,soft}`,
/// `experience[{dates,description}]`, `achievements`, `raw_text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: SkillSet,
    pub experience: Vec<ExperienceEntry>,
    pub achievements: Vec<String>,
    pub raw_text: String,
}

impl ParsedResume {
    /// Number of populated fields, used for the "sparse result" warning.
    pub fn populated_fields(&self) -> usize {
        [
            self.name.is_some(),
            self.email.is_some(),
            self.phone.is_some(),
            !self.skills.is_empty(),
            !self.experience.is_empty(),
            !self.achievements.is_empty(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let parsed = ParsedResume {
            name: Some("Jane Doe".to_string()),
            skills: SkillSet {
                technical: vec!["python".to_string()],
                soft: vec![],
            },
            experience: vec![ExperienceEntry {
                dates: vec!["Jan 2020".to_string()],
                description: "Engineer at Acme".to_string(),
            }],
            ..Default::default()
        };

        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["name"], "Jane Doe");
        assert!(value["email"].is_null());
        assert_eq!(value["skills"]["technical"][0], "python");
        assert_eq!(value["experience"][0]["dates"][0], "Jan 2020");
        assert_eq!(value["raw_text"], "");
    }

    #[test]
    fn test_populated_fields() {
        assert_eq!(ParsedResume::default().populated_fields(), 0);

        let parsed = ParsedResume {
            email: Some("a@b.io".to_string()),
            achievements: vec!["Shipped the thing on time".to_string()],
            ..Default::default()
        };
        assert_eq!(parsed.populated_fields(), 2);
    }
}
