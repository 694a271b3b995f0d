// File: src/parser/location.rs
use crate::model::CleanedExtraction;
use crate::parser::ranks::{LocativePreposition, by_rank};
use crate::parser::residual::strip_spans;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

// Shortest run of letters, digits and spaces after the preposition, ending
// at the next "on"/"at"/"from"/"to", sentence punctuation, or end of text.
fn locative_pattern(prep: LocativePreposition) -> &'static Regex {
    static PATTERNS: OnceLock<HashMap<LocativePreposition, Regex>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        by_rank::<LocativePreposition>()
            .into_iter()
            .map(|p| {
                let pattern = format!(
                    r"(?i)\b{}\s+([a-z0-9\s]+?)(?:\s+(?:on|at|from|to)\b|\s*[.,;!?]|$)",
                    p
                );
                let re = Regex::new(&pattern).expect("location pattern is valid");
                (p, re)
            })
            .collect()
    });
    &patterns[&prep]
}

/// Finds at most one place name in `text`.
///
/// Prepositions are tried in rank order; the first one whose first
/// occurrence yields a non-empty phrase wins.
pub fn extract_location(text: &str) -> CleanedExtraction<Option<String>> {
    for prep in by_rank::<LocativePreposition>() {
        let Some(caps) = locative_pattern(prep).captures(text) else {
            continue;
        };
        let (Some(whole), Some(place)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let location = place.as_str().trim();
        if location.is_empty() {
            continue;
        }
        log::debug!("Location '{}' after '{}'", location, prep);

        let span = whole.start()..place.end();
        return CleanedExtraction {
            value: Some(location.to_string()),
            residual_text: strip_spans(text, std::slice::from_ref(&span)),
            spans: vec![span],
        };
    }

    CleanedExtraction {
        value: None,
        spans: Vec::new(),
        residual_text: strip_spans(text, &[]),
    }
}
