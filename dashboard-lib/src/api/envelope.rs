//! Response envelope unwrapping.
//!
//! Endpoints wrap their payloads inconsistently: `{ data: [...] }`, a bare
//! array, `{ items: [...] }` or `{ results: [...] }`.

use serde_json::Value as Json;

use crate::model::Row;
use crate::model::Value;

const LIST_KEYS: [&str; 3] = ["data", "items", "results"];

/// Pulls the item array out of a list response.
///
/// Tries `data`, the body itself, `items`, then `results`; anything else is
/// an empty list.
pub fn list_values(body: Json) -> Vec<Value> {
    let items = match body {
        Json::Array(items) => items,
        Json::Object(mut map) => LIST_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Json::Array(items)) => Some(items),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    items.into_iter().map(Value::from).collect()
}

/// Like [`list_values`], keeping only object entries.
pub fn list_rows(body: Json) -> Vec<Row> {
    into_rows(list_values(body))
}

/// Accepts only a top-level array.
pub fn top_level_rows(body: Json) -> Vec<Row> {
    match body {
        Json::Array(items) => into_rows(items.into_iter().map(Value::from).collect()),
        _ => Vec::new(),
    }
}

/// Pulls a single item out of a response: `data` when it is truthy, else the
/// body itself.
pub fn single_row(body: Json) -> Row {
    match body {
        Json::Object(mut map) => match map.remove("data") {
            Some(Json::Object(data)) => Row::from(data),
            Some(data) if json_truthy(&data) => Row::new(),
            _ => Row::from(map),
        },
        _ => Row::new(),
    }
}

/// The body itself as a row; non-objects become an empty row.
pub fn body_row(body: Json) -> Row {
    match body {
        Json::Object(map) => Row::from(map),
        _ => Row::new(),
    }
}

fn json_truthy(json: &Json) -> bool {
    match json {
        Json::Null => false,
        Json::Bool(b) => *b,
        Json::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Json::String(s) => !s.is_empty(),
        Json::Array(_) | Json::Object(_) => true,
    }
}

fn into_rows(values: Vec<Value>) -> Vec<Row> {
    values
        .into_iter()
        .filter_map(|value| match value {
            Value::Row(row) => Some(*row),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelope_order() {
        assert_eq!(list_rows(json!({"data": [{"a": 1}], "items": [{}, {}]})).len(), 1);
        assert_eq!(list_rows(json!([{"a": 1}, {"a": 2}])).len(), 2);
        assert_eq!(list_rows(json!({"data": "x", "items": [{"a": 1}]})).len(), 1);
        assert_eq!(list_rows(json!({"results": [{"a": 1}]})).len(), 1);
        assert!(list_rows(json!({"message": "ok"})).is_empty());
        assert!(list_rows(json!(null)).is_empty());
    }

    #[test]
    fn test_list_values_keeps_scalars() {
        let values = list_values(json!({"data": ["Fashion", {"label": "Food"}]}));
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], Value::from("Fashion"));
        assert_eq!(list_rows(json!({"data": ["Fashion", {"label": "Food"}]})).len(), 1);
    }

    #[test]
    fn test_top_level_only() {
        assert_eq!(top_level_rows(json!([{"_id": "v1"}])).len(), 1);
        assert!(top_level_rows(json!({"data": [{"_id": "v1"}]})).is_empty());
    }

    #[test]
    fn test_single_row() {
        let row = single_row(json!({"data": {"_id": "u1"}}));
        assert_eq!(row.get_string("_id").unwrap(), Some("u1"));

        let row = single_row(json!({"data": null, "_id": "u2"}));
        assert_eq!(row.get_string("_id").unwrap(), Some("u2"));

        let row = single_row(json!({"_id": "u3"}));
        assert_eq!(row.get_string("_id").unwrap(), Some("u3"));
    }
}
