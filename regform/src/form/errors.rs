use serde::Serialize;

use crate::messages::MessageCatalog;
use crate::validation::ErrorKind;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Field name from the schema.
    pub field: String,
    /// Why the value was rejected.
    pub kind: ErrorKind,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// Display text for this error.
    pub fn message(&self, catalog: &dyn MessageCatalog) -> String {
        catalog.message(&self.field, &self.kind)
    }
}

/// Per-field errors of one submission attempt, in schema order.
///
/// A field present here is invalid; an absent field is valid. The map is
/// rebuilt from scratch on every submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrorMap {
    errors: Vec<FieldError>,
}

impl ValidationErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the error for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, kind: ErrorKind) {
        let field = field.into();
        match self.errors.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.kind = kind,
            None => self.errors.push(FieldError { field, kind }),
        }
    }

    /// Error kind for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&ErrorKind> {
        self.errors.iter().find(|e| e.field == field).map(|e| &e.kind)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Get the first error (if any).
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Names of the failing fields, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl<'a> IntoIterator for &'a ValidationErrorMap {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::DefaultMessages;

    #[test]
    fn test_insert_replaces_existing() {
        let mut map = ValidationErrorMap::new();
        map.insert("email", ErrorKind::MissingField);
        map.insert("age", ErrorKind::MissingField);
        map.insert("email", ErrorKind::FormatMismatch);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("email"), Some(&ErrorKind::FormatMismatch));
        assert_eq!(map.fields().collect::<Vec<_>>(), vec!["email", "age"]);
    }

    #[test]
    fn test_absent_field_is_valid() {
        let map = ValidationErrorMap::new();
        assert!(map.is_empty());
        assert!(!map.contains("email"));
        assert!(map.first().is_none());
    }

    #[test]
    fn test_field_error_message() {
        let error = FieldError::new("email", ErrorKind::FormatMismatch);
        assert_eq!(error.message(&DefaultMessages), "Invalid email format");
    }
}
