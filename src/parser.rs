use serde_json::Value;

use crate::models::RawProductEntry;

/// Splits a catalog `text` field into `(code, name)`.
///
/// The backend encodes rows as `CODE / NAME`, but free-form rows exist.
/// Segments are trimmed and empty ones dropped. With a single surviving
/// segment the name falls back to the full trimmed text, not the segment.
pub fn parse_code_and_name(text: &str) -> (String, String) {
    let parts: Vec<&str> = text
        .split('/')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [] => (String::new(), text.trim().to_string()),
        [code] => (code.to_string(), text.trim().to_string()),
        [code, rest @ ..] => (code.to_string(), rest.join(" / ")),
    }
}

/// Lifts a search response body into raw entries. Anything that is not a
/// JSON array yields no entries; ids that arrive as numbers are stringified.
pub fn entries_from_json(data: &Value) -> Vec<RawProductEntry> {
    let Some(items) = data.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| RawProductEntry {
            id: field_as_string(item, "id"),
            text: field_as_string(item, "text"),
        })
        .collect()
}

fn field_as_string(item: &Value, key: &str) -> String {
    match item.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn code_and_name_from_two_segments() {
        assert_eq!(
            parse_code_and_name("7 / Blue Widget"),
            ("7".to_string(), "Blue Widget".to_string())
        );
    }

    #[test]
    fn no_separator_keeps_full_text_as_name() {
        assert_eq!(
            parse_code_and_name("SoloName"),
            ("".to_string(), "SoloName".to_string())
        );
    }

    #[test]
    fn single_segment_keeps_full_text_as_name() {
        // Single non-empty segment: code is set AND the name repeats the
        // whole trimmed text. Matches the backend's own export.
        assert_eq!(
            parse_code_and_name(" X / "),
            ("X".to_string(), "X /".to_string())
        );
    }

    #[test]
    fn three_segments_rejoin_the_tail() {
        assert_eq!(
            parse_code_and_name(" A / B / C "),
            ("A".to_string(), "B / C".to_string())
        );
    }

    #[test]
    fn empty_text() {
        assert_eq!(parse_code_and_name("  "), ("".to_string(), "".to_string()));
    }

    #[test]
    fn entries_from_array() {
        let data = json!([
            {"id": "7", "text": "7 / Widget"},
            {"id": 42, "text": "42 / Gadget"},
            {"id": null, "text": "orphan"},
            {"text": "no id at all"},
        ]);
        let entries = entries_from_json(&data);
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].id, "7");
        assert_eq!(entries[1].id, "42");
        assert_eq!(entries[2].id, "");
        assert_eq!(entries[3].id, "");
        assert_eq!(entries[3].text, "no id at all");
    }

    #[test]
    fn non_array_bodies_yield_nothing() {
        assert!(entries_from_json(&json!({"error": "nope"})).is_empty());
        assert!(entries_from_json(&json!("just a string")).is_empty());
        assert!(entries_from_json(&Value::Null).is_empty());
    }
}
