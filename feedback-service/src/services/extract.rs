//! Recovery of a clean recommendation list from raw model output.
//!
//! The model is an untrusted text source: the same request may come back as
//! a bare JSON array, a fenced code block, or free-form bullet lines. The
//! cascade here tries each shape in priority order and never errors; an
//! empty result is the caller's cue to substitute [`FALLBACK_FEEDBACK`].

/// Served when nothing usable can be extracted from the model output.
pub const FALLBACK_FEEDBACK: [&str; 3] = [
    "Work 20 question-bank items per day",
    "Review your mistakes in a dedicated notebook",
    "Take a short mock exam every 3 days",
];

/// Cap on items taken from a parsed JSON array.
const MAX_PARSED_ITEMS: usize = 6;

/// Cap on items taken from the line-based fallback.
const MAX_LINE_ITEMS: usize = 4;

/// Extract an ordered list of recommendations from raw model output.
///
/// Cascade: strip code fences, try a JSON parse (an array wins outright,
/// capped at 6 items), otherwise split into lines, strip bullet/numbering
/// markers and keep the first 4 non-empty lines. Malformed JSON is absorbed,
/// never surfaced.
pub fn extract_recommendations(raw: &str) -> Vec<String> {
    let cleaned = strip_fences(raw);
    if cleaned.is_empty() {
        return Vec::new();
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&cleaned) {
        if let serde_json::Value::Array(items) = value {
            return items
                .into_iter()
                .take(MAX_PARSED_ITEMS)
                .map(|item| match item {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect();
        }
    }

    cleaned
        .lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .take(MAX_LINE_ITEMS)
        .map(str::to_string)
        .collect()
}

/// Remove code-fence markers wherever they occur, keeping the inner content
/// in place.
///
/// Handles a fully wrapped block ("```json\n...\n```"), a bare leading or
/// trailing marker, and fences embedded after prose. A language tag is the
/// purely alphanumeric word ending an opening fence line.
fn strip_fences(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("```") {
        cleaned.push_str(&rest[..start]);
        let mut inner = &rest[start + 3..];
        if let Some(newline) = inner.find('\n') {
            let tag = &inner[..newline];
            if !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                inner = &inner[newline + 1..];
            }
        }
        rest = inner;
    }
    cleaned.push_str(rest);

    cleaned.trim().to_string()
}

/// Strip a leading bullet or numbering marker from one line.
///
/// Recognized markers: `-`, `*`, `•`, and digits followed by `.` or `)`.
/// Bare digits are content ("20 questions/day" keeps its 20).
fn strip_list_marker(line: &str) -> &str {
    let s = line.trim_start();

    let rest = if let Some(r) = s.strip_prefix(['-', '*', '•']) {
        r
    } else {
        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        match (digits, s[digits..].chars().next()) {
            (1.., Some('.')) | (1.., Some(')')) => &s[digits + 1..],
            _ => s,
        }
    };

    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_array_returned_verbatim() {
        let raw = r#"["a", "b", "c", "d", "e"]"#;
        assert_eq!(extract_recommendations(raw), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn json_array_capped_at_six() {
        let raw = r#"["1", "2", "3", "4", "5", "6", "7", "8"]"#;
        assert_eq!(
            extract_recommendations(raw),
            vec!["1", "2", "3", "4", "5", "6"]
        );
    }

    #[test]
    fn json_non_string_elements_coerced() {
        let raw = "[1, true, \"tip\"]";
        assert_eq!(extract_recommendations(raw), vec!["1", "true", "tip"]);
    }

    #[test]
    fn fenced_json_array_unwrapped() {
        let raw = "```json\n[\"a\",\"b\",\"c\"]\n```";
        assert_eq!(extract_recommendations(raw), vec!["a", "b", "c"]);
    }

    #[test]
    fn fence_without_language_tag() {
        let raw = "```\n[\"a\",\"b\"]\n```";
        assert_eq!(extract_recommendations(raw), vec!["a", "b"]);
    }

    #[test]
    fn bare_leading_fence_marker() {
        let raw = "```json\n[\"a\",\"b\"]";
        assert_eq!(extract_recommendations(raw), vec!["a", "b"]);
    }

    #[test]
    fn fence_markers_after_prose_are_removed() {
        let raw = "Here are your tips:\n```json\n[\"a\",\"b\",\"c\"]\n```";
        let items = extract_recommendations(raw);
        assert!(items.iter().all(|item| !item.contains("```")));
        assert_eq!(items, vec!["Here are your tips:", "[\"a\",\"b\",\"c\"]"]);
    }

    #[test]
    fn embedded_fence_keeps_surrounding_lines() {
        let raw = "```\n- tip one\n```\nRemember to rest";
        assert_eq!(
            extract_recommendations(raw),
            vec!["tip one", "Remember to rest"]
        );
    }

    #[test]
    fn bullet_lines_stripped_and_capped_at_four() {
        let raw = "- tip one\n* tip two\n1. tip three\n2) tip four\n5. tip five";
        assert_eq!(
            extract_recommendations(raw),
            vec!["tip one", "tip two", "tip three", "tip four"]
        );
    }

    #[test]
    fn bullet_glyph_and_blank_lines() {
        let raw = "• first\n\n\n• second\n";
        assert_eq!(extract_recommendations(raw), vec!["first", "second"]);
    }

    #[test]
    fn leading_digits_without_punctuation_are_content() {
        let raw = "20 questions per day\n3 short sessions";
        assert_eq!(
            extract_recommendations(raw),
            vec!["20 questions per day", "3 short sessions"]
        );
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(extract_recommendations("").is_empty());
        assert!(extract_recommendations("   \n  ").is_empty());
        assert!(extract_recommendations("```\n```").is_empty());
    }

    #[test]
    fn malformed_json_falls_through_to_lines() {
        let raw = "[\"a\", \"b\"";
        assert_eq!(extract_recommendations(raw), vec!["[\"a\", \"b\""]);
    }

    #[test]
    fn non_array_json_falls_through_to_lines() {
        let raw = "{\"feedback\": \"tip\"}";
        assert_eq!(extract_recommendations(raw), vec!["{\"feedback\": \"tip\"}"]);
    }

    #[test]
    fn normalization_is_idempotent_on_plain_lines() {
        let first = extract_recommendations("alpha\nbeta\ngamma");
        let second = extract_recommendations(&first.join("\n"));
        assert_eq!(first, second);
    }
}
