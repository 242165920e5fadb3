//! Serialization for Row.
//!
//! Rows are plain JSON objects on the wire. Reads accept any object and keep
//! every key; nested objects and arrays become [`Value::Row`] and
//! [`Value::List`]. Writes emit every field, including nulls, because the API
//! treats an explicit `null` as "clear this field".

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Row;
use super::Value;

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RowVisitor)
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = Row;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Row, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut row = Row::new();
        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            row.fields.insert(key, Value::from(value));
        }
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_simple_fields() {
        let json = r#"{"name": "Contoso", "coins": 1000000, "active": false}"#;
        let row: Row = serde_json::from_str(json).unwrap();

        assert_eq!(row.get_string("name").unwrap(), Some("Contoso"));
        assert_eq!(row.get_long("coins").unwrap(), Some(1_000_000));
        assert_eq!(row.get_bool("active").unwrap(), Some(false));
    }

    #[test]
    fn test_deserialize_nested() {
        let json = r#"{"vendor": {"business_name": "Acme", "user": {"username": "acme"}}, "media": [{"type": "video"}]}"#;
        let row: Row = serde_json::from_str(json).unwrap();

        assert_eq!(
            row.get_path("vendor.user.username"),
            Some(&Value::from("acme"))
        );
        let media = row.get_list("media").unwrap().unwrap();
        assert_eq!(
            media[0].as_row().and_then(|m| m.get("type")),
            Some(&Value::from("video"))
        );
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<Row>("[1, 2]").is_err());
    }

    #[test]
    fn test_serialize_keeps_nulls() {
        let row = Row::new().set("rejection_reason", Value::Null);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"rejection_reason":null}"#);
    }
}
