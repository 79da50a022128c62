use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::validation::{FieldValue, FormSchema};

const REDACTED: &str = "********";

/// Current value of every field, in schema order.
///
/// Only written through the controller's setters; validation never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    entries: Vec<(String, FieldValue)>,
}

impl FormValues {
    /// Values of a freshly mounted form: empty text, no number, no selection,
    /// unchecked boxes.
    pub fn defaults(schema: &FormSchema) -> Self {
        let entries = schema
            .fields()
            .iter()
            .map(|field| (field.name().to_string(), field.default_value()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Replace the value of an existing field. Returns `false` if the field
    /// is unknown.
    pub(crate) fn set(&mut self, field: &str, value: FieldValue) -> bool {
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// JSON object of all values with sensitive fields masked.
    pub fn redacted(&self, schema: &FormSchema) -> Value {
        let mut object = Map::new();
        for (name, value) in self.iter() {
            let sensitive = schema.field(name).is_some_and(|field| field.is_sensitive());
            let json = if sensitive && !value.is_missing() {
                Value::String(REDACTED.to_string())
            } else {
                serde_json::to_value(value).unwrap_or(Value::Null)
            };
            object.insert(name.to_string(), json);
        }
        Value::Object(object)
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::fields::{AGE, AGREE_TO_TERMS, FULL_NAME, PASSWORD, TICKET_TYPE};

    #[test]
    fn test_defaults() {
        let values = FormValues::defaults(&FormSchema::registration());
        assert_eq!(values.get(FULL_NAME), Some(&FieldValue::text("")));
        assert_eq!(values.get(AGE), Some(&FieldValue::Number(None)));
        assert_eq!(values.get(TICKET_TYPE), Some(&FieldValue::Choice(None)));
        assert_eq!(values.get(AGREE_TO_TERMS), Some(&FieldValue::Flag(false)));
        assert_eq!(values.get("nope"), None);
    }

    #[test]
    fn test_set_unknown_field() {
        let mut values = FormValues::defaults(&FormSchema::registration());
        assert!(!values.set("nope", FieldValue::text("x")));
        assert!(values.set(FULL_NAME, FieldValue::text("Jane")));
        assert_eq!(values.get(FULL_NAME), Some(&FieldValue::text("Jane")));
    }

    #[test]
    fn test_redacted_masks_password() {
        let schema = FormSchema::registration();
        let mut values = FormValues::defaults(&schema);
        values.set(FULL_NAME, FieldValue::text("Jane"));
        values.set(PASSWORD, FieldValue::text("Secret1!"));
        values.set(AGE, FieldValue::number(30.0));

        let json = values.redacted(&schema);
        assert_eq!(json[FULL_NAME], "Jane");
        assert_eq!(json[PASSWORD], REDACTED);
        assert_eq!(json[AGE], 30.0);
        assert_eq!(json[TICKET_TYPE], Value::Null);
        assert!(!json.to_string().contains("Secret1!"));
    }
}
