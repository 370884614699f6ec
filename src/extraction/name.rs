//! Candidate name extraction

use crate::extraction::patterns::{NAME_MAX_CHARS, NAME_MIN_TOKENS, NAME_PATTERNS};
use log::debug;

/// Find the candidate's full name.
///
/// Patterns are tried in precedence order and only the first match of each
/// pattern is looked at. When that match fails validation the next pattern
/// is tried; later matches of the same pattern are never considered.
pub fn extract_name(text: &str) -> Option<String> {
    NAME_PATTERNS
        .iter()
        .enumerate()
        .find_map(|(index, pattern)| {
            let candidate = pattern.captures(text)?.get(1)?.as_str().trim();
            if is_plausible_name(candidate) {
                debug!("Name matched pattern {}: {:?}", index, candidate);
                Some(candidate.to_string())
            } else {
                debug!("Name pattern {} rejected {:?}", index, candidate);
                None
            }
        })
}

fn is_plausible_name(candidate: &str) -> bool {
    candidate.split_whitespace().count() >= NAME_MIN_TOKENS
        && candidate.chars().count() <= NAME_MAX_CHARS
}
