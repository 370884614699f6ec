//! Dated-paragraph experience extraction

use crate::extraction::model::ExperienceEntry;
use crate::extraction::patterns::{
    DATE_TOKEN, DESCRIPTION_MAX_CHARS, EXPERIENCE_MIN_CHARS, MAX_EXPERIENCE_ENTRIES,
    PARAGRAPH_BREAK,
};
use crate::extraction::{collapse_whitespace, truncate_chars};

/// Collect up to five blank-line separated paragraphs that carry a
/// month-and-year date, in document order.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    PARAGRAPH_BREAK
        .split(text)
        .filter_map(experience_entry)
        .take(MAX_EXPERIENCE_ENTRIES)
        .collect()
}

fn experience_entry(paragraph: &str) -> Option<ExperienceEntry> {
    let dates: Vec<String> = DATE_TOKEN
        .find_iter(paragraph)
        .map(|m| m.as_str().to_string())
        .collect();
    if dates.is_empty() {
        return None;
    }

    let collapsed = collapse_whitespace(paragraph);
    if collapsed.chars().count() <= EXPERIENCE_MIN_CHARS {
        return None;
    }

    Some(ExperienceEntry {
        dates,
        description: truncate_chars(&collapsed, DESCRIPTION_MAX_CHARS).to_string(),
    })
}
