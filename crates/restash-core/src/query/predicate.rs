//! Search and filter predicates.

use serde_json::{Map, Value};

use crate::record::Record;

/// Render a field value the way predicates see it.
///
/// Strings render unquoted; every other value uses its compact JSON
/// encoding. This is the single stringification rule shared by search,
/// textual filters, and display helpers.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Free-text search: case-insensitive substring over every field.
///
/// A record matches if ANY top-level field's stringified value contains
/// the term. An empty term matches everything.
pub fn matches_search(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();

    // Safe: records are objects by construction
    record
        .as_value()
        .as_object()
        .unwrap()
        .values()
        .any(|v| stringify(v).to_lowercase().contains(&needle))
}

/// Field filter: every entry must match (logical AND).
///
/// Per entry: a null or empty-string expected value is ignored; a string
/// expected value matches by case-insensitive substring against the
/// stringified field value; any other expected value requires exact
/// equality. A record missing the field never matches a live entry.
pub fn matches_filter(record: &Record, filter: &Map<String, Value>) -> bool {
    filter.iter().all(|(field, expected)| {
        match expected {
            Value::Null => true,
            Value::String(s) if s.is_empty() => true,
            Value::String(s) => record.get(field).is_some_and(|actual| {
                stringify(actual).to_lowercase().contains(&s.to_lowercase())
            }),
            other => record.get(field) == Some(other),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::new(value).unwrap()
    }

    #[test]
    fn search_matches_any_field() {
        let r = record(json!({"id": 1, "name": "Alice", "role": "admin"}));
        assert!(matches_search(&r, "ali"));
        assert!(matches_search(&r, "ADMIN"));
        assert!(!matches_search(&r, "bob"));
    }

    #[test]
    fn search_sees_non_string_fields() {
        let r = record(json!({"id": 1, "count": 1234}));
        assert!(matches_search(&r, "234"));
        assert!(matches_search(&r, "1"));
    }

    #[test]
    fn empty_search_matches_everything() {
        let r = record(json!({"id": 1}));
        assert!(matches_search(&r, ""));
    }

    #[test]
    fn filter_blank_entries_are_ignored() {
        let r = record(json!({"id": 1, "role": "admin"}));
        let mut filter = Map::new();
        filter.insert("role".to_string(), Value::Null);
        filter.insert("name".to_string(), json!(""));
        assert!(matches_filter(&r, &filter));
    }

    #[test]
    fn filter_string_is_substring_case_insensitive() {
        let r = record(json!({"id": 1, "role": "Administrator"}));
        let mut filter = Map::new();
        filter.insert("role".to_string(), json!("admin"));
        assert!(matches_filter(&r, &filter));
    }

    #[test]
    fn filter_non_string_is_exact() {
        let r = record(json!({"id": 1, "age": 30}));
        let mut filter = Map::new();
        filter.insert("age".to_string(), json!(30));
        assert!(matches_filter(&r, &filter));

        filter.insert("age".to_string(), json!(3));
        assert!(!matches_filter(&r, &filter));
    }

    #[test]
    fn filter_missing_field_does_not_match() {
        let r = record(json!({"id": 1}));
        let mut filter = Map::new();
        filter.insert("role".to_string(), json!("admin"));
        assert!(!matches_filter(&r, &filter));
    }

    #[test]
    fn filter_entries_are_anded() {
        let r = record(json!({"id": 1, "role": "admin", "active": true}));
        let mut filter = Map::new();
        filter.insert("role".to_string(), json!("admin"));
        filter.insert("active".to_string(), json!(true));
        assert!(matches_filter(&r, &filter));

        filter.insert("active".to_string(), json!(false));
        assert!(!matches_filter(&r, &filter));
    }
}
