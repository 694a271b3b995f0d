// File: src/parser/residual.rs
use std::ops::Range;

/// Collapses whitespace runs to single spaces and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts every span out of `text` exactly once and normalizes what is left.
///
/// Spans are byte ranges into `text`; overlapping or touching spans are
/// merged, and spans outside the text are clamped.
pub fn strip_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut sorted: Vec<Range<usize>> = spans
        .iter()
        .map(|s| s.start.min(text.len())..s.end.min(text.len()))
        .filter(|s| s.start < s.end)
        .collect();
    sorted.sort_by_key(|s| s.start);

    let mut kept = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in sorted {
        if span.end <= cursor {
            continue;
        }
        let start = span.start.max(cursor);
        if let Some(piece) = text.get(cursor..start) {
            kept.push_str(piece);
        }
        kept.push(' ');
        cursor = span.end;
    }
    if let Some(rest) = text.get(cursor..) {
        kept.push_str(rest);
    }
    normalize_whitespace(&kept)
}
