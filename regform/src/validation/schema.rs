//! Declarative field schemas and the registration form catalog.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use thiserror::Error;

use super::rules::{self, EMAIL_PATTERN};
use super::{ErrorKind, FieldValue};

/// Field names of the registration form.
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const USERNAME: &str = "username";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const AGE: &str = "age";
    pub const WEBSITE_URL: &str = "websiteUrl";
    pub const TICKET_TYPE: &str = "ticketType";
    pub const AGREE_TO_TERMS: &str = "agreeToTerms";
}

/// Ticket types offered by the registration form.
pub const TICKET_TYPES: [&str; 3] = ["General Access", "VIP", "Student"];

/// Type alias for custom validation rule closures.
pub type CustomRule = Arc<dyn Fn(&FieldValue) -> Result<(), ErrorKind> + Send + Sync>;

/// Kind of input a field is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Choice { options: Vec<String> },
    Flag,
}

impl FieldKind {
    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Choice { .. } => "choice",
            Self::Flag => "flag",
        }
    }
}

/// Errors raised while assembling a [`FormSchema`].
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
    #[error("form schema has no fields")]
    Empty,
}

/// Validation rules for one field.
///
/// Built with a fluent API:
///
/// ```ignore
/// let age = FieldSchema::number("age", "Age")
///     .required()
///     .integer()
///     .range(18.0, 100.0);
/// ```
#[derive(Clone)]
pub struct FieldSchema {
    name: String,
    label: String,
    kind: FieldKind,
    required: bool,
    missing_kind: Option<ErrorKind>,
    sensitive: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
    integer: bool,
    pattern: Option<Regex>,
    custom: Option<CustomRule>,
}

impl FieldSchema {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            missing_kind: None,
            sensitive: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            integer: false,
            pattern: None,
            custom: None,
        }
    }

    /// Declare a free text field.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Declare a numeric field.
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    /// Declare a select field with a fixed option set.
    pub fn choice<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(name, label, FieldKind::Choice { options })
    }

    /// Declare a checkbox field.
    pub fn flag(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Flag)
    }

    /// Require a value.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Require a value, reporting `kind` instead of the default when it is missing.
    pub fn required_with(mut self, kind: ErrorKind) -> Self {
        self.required = true;
        self.missing_kind = Some(kind);
        self
    }

    /// Mark the value as secret so it is redacted from logs.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Require a character count within `[min, max]`.
    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    /// Require minimum length (in characters).
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Require maximum length (in characters).
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Require a number within `[min, max]`.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Reject numbers with a fractional part.
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Add a custom rule that runs after the built-in ones.
    pub fn custom<F>(mut self, rule: F) -> Self
    where
        F: Fn(&FieldValue) -> Result<(), ErrorKind> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(rule));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Value the field holds when the form is mounted.
    pub fn default_value(&self) -> FieldValue {
        FieldValue::default_for(&self.kind)
    }

    /// Error reported when a required value is missing.
    pub fn missing_kind(&self) -> ErrorKind {
        if let Some(kind) = &self.missing_kind {
            return kind.clone();
        }
        match self.kind {
            FieldKind::Text | FieldKind::Number => ErrorKind::MissingField,
            FieldKind::Choice { .. } => ErrorKind::UnselectedOption,
            FieldKind::Flag => ErrorKind::UnacceptedAgreement,
        }
    }

    /// Evaluate `value` against this field's rules.
    ///
    /// Rules run as required, then format/length/range/option, then custom,
    /// and evaluation stops at the first failure.
    pub fn evaluate(&self, value: &FieldValue) -> Result<(), ErrorKind> {
        if value.is_missing() {
            if self.required {
                return rules::required_check(value).map_err(|_| self.missing_kind());
            }
            // Optional and empty: only a custom rule may still object.
            return self.run_custom(value);
        }

        match (&self.kind, value) {
            (FieldKind::Text, FieldValue::Text(text)) => {
                rules::length_check(text, self.min_length, self.max_length)?;
                if let Some(pattern) = &self.pattern {
                    rules::pattern_check(text, pattern)?;
                }
            }
            (FieldKind::Number, FieldValue::Number(Some(number))) => {
                if self.integer {
                    rules::integer_check(*number)?;
                }
                rules::range_check(*number, self.min, self.max)?;
            }
            (FieldKind::Choice { options }, FieldValue::Choice(selected)) => {
                rules::option_check(selected.as_deref(), options)?;
            }
            (FieldKind::Flag, FieldValue::Flag(checked)) => rules::agreement_check(*checked)?,
            _ => return Err(ErrorKind::FormatMismatch),
        }

        self.run_custom(value)
    }

    fn run_custom(&self, value: &FieldValue) -> Result<(), ErrorKind> {
        match &self.custom {
            Some(rule) => rule(value),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("custom", &self.custom.is_some())
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable set of field schemas making up one form.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Arc<[FieldSchema]>,
}

impl FormSchema {
    /// Create a schema, rejecting empty or duplicate field declarations.
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::Empty);
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|earlier| earlier.name == field.name) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self {
            fields: fields.into(),
        })
    }

    /// The conference registration form.
    pub fn registration() -> Self {
        let entries = vec![
            FieldSchema::text(fields::FULL_NAME, "Full name").required(),
            FieldSchema::text(fields::USERNAME, "Username")
                .required()
                .length(6, 20),
            FieldSchema::text(fields::EMAIL, "Email")
                .required()
                .pattern(EMAIL_PATTERN.clone()),
            FieldSchema::text(fields::PASSWORD, "Password")
                .required_with(ErrorKind::WeakPassword)
                .sensitive()
                .custom(|value| rules::password_complexity(value.as_text().unwrap_or_default())),
            FieldSchema::number(fields::AGE, "Age")
                .required()
                .integer()
                .range(18.0, 100.0),
            FieldSchema::text(fields::WEBSITE_URL, "Personal website (optional)")
                .custom(|value| rules::optional_url_check(value.as_text().unwrap_or_default())),
            FieldSchema::choice(fields::TICKET_TYPE, "Ticket type", TICKET_TYPES).required(),
            FieldSchema::flag(fields::AGREE_TO_TERMS, "I agree to the terms & conditions")
                .required(),
        ];
        Self {
            fields: entries.into(),
        }
    }

    /// Field schemas in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Look up a field schema by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::registration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_fields_rejected() {
        let result = FormSchema::new(vec![
            FieldSchema::text("a", "A"),
            FieldSchema::text("a", "A again"),
        ]);
        assert!(matches!(result, Err(SchemaError::DuplicateField(name)) if name == "a"));
    }

    #[test]
    fn test_empty_schema_rejected() {
        assert!(matches!(FormSchema::new(Vec::new()), Err(SchemaError::Empty)));
    }

    #[test]
    fn test_registration_catalog_order() {
        let schema = FormSchema::registration();
        let names: Vec<&str> = schema.fields().iter().map(FieldSchema::name).collect();
        assert_eq!(
            names,
            vec![
                fields::FULL_NAME,
                fields::USERNAME,
                fields::EMAIL,
                fields::PASSWORD,
                fields::AGE,
                fields::WEBSITE_URL,
                fields::TICKET_TYPE,
                fields::AGREE_TO_TERMS,
            ]
        );
        assert!(!schema.field(fields::WEBSITE_URL).is_some_and(FieldSchema::is_required));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let field = FieldSchema::text("code", "Code")
            .required()
            .length(3, 5)
            .pattern(Regex::new("^[a-z]+$").unwrap())
            .custom(|_| Err(ErrorKind::InvalidUrl));

        assert_eq!(field.evaluate(&FieldValue::text("")), Err(ErrorKind::MissingField));
        assert!(matches!(
            field.evaluate(&FieldValue::text("ABCDEFG")),
            Err(ErrorKind::LengthOutOfRange { .. })
        ));
        assert_eq!(field.evaluate(&FieldValue::text("AB1")), Err(ErrorKind::FormatMismatch));
        assert_eq!(field.evaluate(&FieldValue::text("abc")), Err(ErrorKind::InvalidUrl));
    }

    #[test]
    fn test_optional_empty_skips_format_rules() {
        let field = FieldSchema::text("nick", "Nickname").min_length(3);
        assert_eq!(field.evaluate(&FieldValue::text("")), Ok(()));
        assert!(field.evaluate(&FieldValue::text("ab")).is_err());
    }

    #[test]
    fn test_kind_mismatch_is_format_error() {
        let field = FieldSchema::number("n", "N").required();
        assert_eq!(field.evaluate(&FieldValue::text("12")), Err(ErrorKind::FormatMismatch));
    }

    #[test]
    fn test_missing_kind_defaults() {
        assert_eq!(FieldSchema::text("t", "T").missing_kind(), ErrorKind::MissingField);
        assert_eq!(
            FieldSchema::choice("c", "C", ["x"]).missing_kind(),
            ErrorKind::UnselectedOption
        );
        assert_eq!(FieldSchema::flag("f", "F").missing_kind(), ErrorKind::UnacceptedAgreement);
        assert_eq!(
            FieldSchema::text("p", "P")
                .required_with(ErrorKind::WeakPassword)
                .missing_kind(),
            ErrorKind::WeakPassword
        );
    }
}
