//! The immutable record type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::Index;

use crate::error::{Mutation, RecordError};

/// Read-only mapping from field names to JSON values.
///
/// Fields are fixed at construction. The backing map is private and the
/// type implements `Index` but not `IndexMut`, so the only mutation entry
/// points are the `set_*`/`del_*` methods, which always fail.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Build a record from `(name, value)` pairs. Later duplicates win.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Key-style lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Attribute-style lookup.
    ///
    /// Returns the same value as key-style access, but a missing field is an
    /// error rather than `None`.
    pub fn attr(&self, name: &str) -> Result<&Value, RecordError> {
        self.fields
            .get(name)
            .ok_or_else(|| RecordError::NoSuchField(name.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.fields.iter()
    }

    /// Borrow the fields as a JSON map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the record, returning its fields
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    /// `record[key] = value`. Always rejected.
    pub fn set_item(&self, key: &str, _value: impl Into<Value>) -> Result<(), RecordError> {
        Err(self.reject(Mutation::SetItem, key))
    }

    /// `record.name = value`. Always rejected.
    pub fn set_attr(&self, name: &str, _value: impl Into<Value>) -> Result<(), RecordError> {
        Err(self.reject(Mutation::SetAttr, name))
    }

    /// `del record[key]`. Always rejected.
    pub fn del_item(&self, key: &str) -> Result<Value, RecordError> {
        Err(self.reject(Mutation::DelItem, key))
    }

    /// `del record.name`. Always rejected.
    pub fn del_attr(&self, name: &str) -> Result<Value, RecordError> {
        Err(self.reject(Mutation::DelAttr, name))
    }

    fn reject(&self, operation: Mutation, field: &str) -> RecordError {
        tracing::debug!(%operation, field, "rejected mutation of immutable record");
        RecordError::ImmutabilityViolation {
            operation,
            field: field.to_string(),
        }
    }
}

impl Index<&str> for Record {
    type Output = Value;

    /// Missing keys index to `Value::Null`, as with `serde_json::Value`.
    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.fields.get(key).unwrap_or(&NULL)
    }
}

// Only an equal JSON object matches; null never does, even for an empty record.
impl PartialEq<Value> for Record {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::Object(map) => &self.fields == map,
            _ => false,
        }
    }
}

impl PartialEq<Record> for Value {
    fn eq(&self, other: &Record) -> bool {
        other == self
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = if f.alternate() {
            serde_json::to_string_pretty(&self.fields)
        } else {
            serde_json::to_string(&self.fields)
        }
        .map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null => Err(RecordError::NotAMapping("null")),
            Value::Bool(_) => Err(RecordError::NotAMapping("boolean")),
            Value::Number(_) => Err(RecordError::NotAMapping("number")),
            Value::String(_) => Err(RecordError::NotAMapping("string")),
            Value::Array(_) => Err(RecordError::NotAMapping("array")),
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.fields)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::immutable;
    use serde_json::json;

    fn point() -> Record {
        immutable!(x = 2, y = 23)
    }

    #[test]
    fn test_key_and_attr_access_agree() {
        let record = point();
        assert_eq!(record["x"], 2);
        assert_eq!(record.get("x"), Some(&json!(2)));
        assert_eq!(record.attr("x").unwrap(), &record["x"]);
        assert_eq!(record.attr("y").unwrap(), &record["y"]);
    }

    #[test]
    fn test_missing_field() {
        let record = point();
        assert!(record["z"].is_null());
        assert!(record.get("z").is_none());
        assert_eq!(record.attr("z"), Err(RecordError::NoSuchField("z".to_string())));
    }

    #[test]
    fn test_every_mutation_path_is_rejected() {
        let record = point();
        let before = record.clone();

        let errors = [
            record.set_item("x", 5).unwrap_err(),
            record.set_attr("x", 5).unwrap_err(),
            record.del_item("x").unwrap_err(),
            record.del_attr("x").unwrap_err(),
        ];
        let operations: Vec<Mutation> = errors
            .iter()
            .map(|e| match e {
                RecordError::ImmutabilityViolation { operation, field } => {
                    assert_eq!(field, "x");
                    *operation
                }
                other => panic!("unexpected error: {other}"),
            })
            .collect();

        assert_eq!(
            operations,
            vec![
                Mutation::SetItem,
                Mutation::SetAttr,
                Mutation::DelItem,
                Mutation::DelAttr
            ]
        );
        assert_eq!(record, before);
    }

    #[test]
    fn test_new_fields_cannot_be_added() {
        let record = point();
        assert!(record.set_item("z", 1).unwrap_err().is_immutability_violation());
        assert!(record.set_attr("z", 1).unwrap_err().is_immutability_violation());
        assert!(!record.contains_key("z"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_never_equal_to_null() {
        assert!(point() != Value::Null);
        assert!(Value::Null != point());
        assert!(immutable!() != Value::Null);
    }

    #[test]
    fn test_equal_to_matching_object() {
        assert!(point() == json!({"x": 2, "y": 23}));
        assert!(point() != json!({"x": 2}));
        assert!(point() != json!([2, 23]));
    }

    #[test]
    fn test_display_is_json() {
        let rendered = point().to_string();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, json!({"x": 2, "y": 23}));
    }

    #[test]
    fn test_debug_is_json() {
        let compact: Value = serde_json::from_str(&format!("{:?}", point())).unwrap();
        let pretty: Value = serde_json::from_str(&format!("{:#?}", point())).unwrap();
        assert_eq!(compact, pretty);
        assert_eq!(compact["y"], 23);
    }

    #[test]
    fn test_empty_record_renders_empty_object() {
        let record = immutable!();
        assert!(record.is_empty());
        assert_eq!(record.to_string(), "{}");
    }

    #[test]
    fn test_try_from_value() {
        let record = Record::try_from(json!({"name": "pet", "tags": ["a"]})).unwrap();
        assert_eq!(record["tags"], json!(["a"]));

        assert_eq!(
            Record::try_from(json!([1, 2])),
            Err(RecordError::NotAMapping("array"))
        );
        assert_eq!(Record::try_from(Value::Null), Err(RecordError::NotAMapping("null")));
    }

    #[test]
    fn test_serde_is_transparent() {
        let record = point();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"x": 2, "y": 23}));

        let back: Record = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_from_fields_later_duplicate_wins() {
        let record = Record::from_fields([("a", 1), ("a", 2)]);
        assert_eq!(record.len(), 1);
        assert_eq!(record["a"], 2);
    }

    #[test]
    fn test_record_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Record>();
    }
}
