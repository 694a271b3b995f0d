// File: src/parser/participants.rs
use crate::model::CleanedExtraction;
use crate::parser::ranks::{TriggerPreposition, by_rank};
use crate::parser::residual::strip_spans;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

// One or two capitalized words right after the trigger word.
fn trigger_pattern(prep: TriggerPreposition) -> &'static Regex {
    static PATTERNS: OnceLock<HashMap<TriggerPreposition, Regex>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        by_rank::<TriggerPreposition>()
            .into_iter()
            .map(|p| {
                let pattern = format!(r"\b{}\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)", p);
                let re = Regex::new(&pattern).expect("participant pattern is valid");
                (p, re)
            })
            .collect()
    });
    &patterns[&prep]
}

/// Pulls personal names out of `text`.
///
/// Names are collected per trigger word in rank order, left to right within
/// the original text, keeping only the first sighting of each exact name.
/// Every accepted "<trigger> <name>" phrase is cut out of the residual text
/// by its own span.
pub fn extract_participants(text: &str) -> CleanedExtraction<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    let mut spans = Vec::new();

    for prep in by_rank::<TriggerPreposition>() {
        for caps in trigger_pattern(prep).captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let name = name.as_str().trim().to_string();
            if names.contains(&name) {
                continue;
            }
            log::debug!("Participant '{}' after '{}'", name, prep);
            names.push(name);
            spans.push(whole.start()..whole.end());
        }
    }

    let residual_text = strip_spans(text, &spans);
    CleanedExtraction {
        value: names,
        spans,
        residual_text,
    }
}
