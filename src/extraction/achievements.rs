//! Achievement and action-verb extraction

use crate::extraction::patterns::{
    ACHIEVEMENT_CUES, ACHIEVEMENT_MIN_CHARS, BULLET_LINE, IMPACT_WORDS, MAX_ACHIEVEMENTS,
};
use indexmap::IndexSet;
use log::debug;

/// Up to five distinct achievements, favouring earlier cue patterns.
pub fn extract_achievements(text: &str) -> Vec<String> {
    collect_achievements(text, false)
}

/// Run the cue patterns over the whole text, optionally followed by the
/// impact-bullet pass, and keep the first five distinct entries.
pub(crate) fn collect_achievements(text: &str, impact_bullets: bool) -> Vec<String> {
    let mut found = IndexSet::new();

    for (index, cue) in ACHIEVEMENT_CUES.iter().enumerate() {
        let before = found.len();
        for caps in cue.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                insert_candidate(&mut found, m.as_str());
            }
        }
        debug!("Achievement cue {} added {} entries", index, found.len() - before);
    }

    if impact_bullets {
        for caps in BULLET_LINE.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            let lowered = m.as_str().to_lowercase();
            if IMPACT_WORDS.iter().any(|word| lowered.contains(word)) {
                insert_candidate(&mut found, m.as_str());
            }
        }
    }

    found.into_iter().take(MAX_ACHIEVEMENTS).collect()
}

fn insert_candidate(found: &mut IndexSet<String>, raw: &str) {
    let candidate = raw.trim();
    if candidate.chars().count() > ACHIEVEMENT_MIN_CHARS {
        found.insert(candidate.to_string());
    }
}
