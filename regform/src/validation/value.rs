use serde::Serialize;

use super::FieldKind;

/// Raw input value of one form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text input.
    Text(String),
    /// Numeric input; `None` when the input is empty or not a number.
    Number(Option<f64>),
    /// Checkbox state.
    Flag(bool),
    /// Selected option of a select input; `None` when nothing is selected.
    Choice(Option<String>),
}

impl FieldValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a numeric value.
    pub fn number(value: f64) -> Self {
        Self::Number(Some(value))
    }

    /// Create a selected choice.
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(Some(value.into()))
    }

    /// Value a freshly mounted form holds for a field of the given kind.
    pub fn default_for(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text(String::new()),
            FieldKind::Number => Self::Number(None),
            FieldKind::Choice { .. } => Self::Choice(None),
            FieldKind::Flag => Self::Flag(false),
        }
    }

    /// Convert raw renderer text into a value of the given kind.
    ///
    /// Never fails: input that cannot be read as the kind becomes the empty
    /// value of that kind, the same way a browser number input reports
    /// garbage as empty.
    pub fn parse(kind: &FieldKind, raw: &str) -> Self {
        let trimmed = raw.trim();
        match kind {
            FieldKind::Text => Self::Text(raw.to_string()),
            FieldKind::Number => Self::Number(trimmed.parse::<f64>().ok().filter(|n| n.is_finite())),
            FieldKind::Choice { .. } if trimmed.is_empty() => Self::Choice(None),
            FieldKind::Choice { .. } => Self::Choice(Some(trimmed.to_string())),
            FieldKind::Flag => Self::Flag(matches!(
                trimmed.to_ascii_lowercase().as_str(),
                "y" | "yes" | "true" | "1" | "on"
            )),
        }
    }

    /// Returns `true` if the value has the shape a field of `kind` stores.
    pub fn matches_kind(&self, kind: &FieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::Text(_), FieldKind::Text)
                | (Self::Number(_), FieldKind::Number)
                | (Self::Choice(_), FieldKind::Choice { .. })
                | (Self::Flag(_), FieldKind::Flag)
        )
    }

    /// Returns `true` if the value counts as "not filled in".
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(number) => number.is_none(),
            Self::Choice(choice) => choice.as_deref().is_none_or(|c| c.trim().is_empty()),
            Self::Flag(checked) => !checked,
        }
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Human-readable rendering used for banners and prompts.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(Some(n)) => n.to_string(),
            Self::Number(None) => String::new(),
            Self::Choice(choice) => choice.clone().unwrap_or_default(),
            Self::Flag(checked) => checked.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(Some(value))
    }
}
