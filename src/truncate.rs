/// Outcome of bounding a payload: the (possibly shortened) text and whether
/// anything was cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    pub text: String,
    pub was_truncated: bool,
}

/// Cut `text` down to at most `max_chars` characters.
///
/// The cut is a raw character cut and may land mid-hunk inside a diff;
/// callers surface a warning rather than repairing the torn fragment.
/// Input at or under the limit is returned byte-identical.
pub fn clip(text: String, max_chars: usize) -> Truncation {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Truncation {
            text: text[..cut].to_string(),
            was_truncated: true,
        },
        None => Truncation {
            text,
            was_truncated: false,
        },
    }
}

/// Bounded view of a long string for log output.
pub fn preview(s: &str, max_chars: usize) -> String {
    let clipped = clip(s.to_string(), max_chars);
    if clipped.was_truncated {
        let dropped = s.chars().count() - max_chars;
        format!("{}...\n[{} more characters]", clipped.text, dropped)
    } else {
        clipped.text
    }
}
