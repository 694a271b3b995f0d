// File: src/parser/title.rs
use crate::parser::ranks::{EventKeyword, by_rank};

pub const FALLBACK_KEYWORD: &str = "Meeting";
pub const FALLBACK_TITLE: &str = "Scheduled Event";

/// First event keyword, in rank order, that occurs anywhere in `text`
/// (case-insensitive substring match).
pub fn detect_keyword(text: &str) -> Option<EventKeyword> {
    let lower = text.to_lowercase();
    by_rank::<EventKeyword>().into_iter().find(|kw| {
        let word: &'static str = (*kw).into();
        lower.contains(word)
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds a display title from the raw request and the participant list.
pub fn synthesize_title(text: &str, participants: &[String]) -> String {
    let head = detect_keyword(text).map(|kw| capitalize(kw.into()));

    match (head, participants.is_empty()) {
        (Some(head), true) => head,
        (Some(head), false) => format!("{} with {}", head, participants.join(", ")),
        (None, false) => format!("{} with {}", FALLBACK_KEYWORD, participants.join(", ")),
        (None, true) => FALLBACK_TITLE.to_string(),
    }
}
