use serde::Serialize;
use thiserror::Error;

/// Categorical reason a field value was rejected.
///
/// These are data, not faults: the form controller collects them into a
/// [`ValidationErrorMap`](crate::form::ValidationErrorMap) and a
/// [`MessageCatalog`](crate::messages::MessageCatalog) turns them into prose.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    /// Required value is empty or whitespace-only.
    #[error("value is required")]
    MissingField,

    /// Character count is outside the allowed bounds.
    #[error("length {actual} is out of range")]
    LengthOutOfRange {
        min: Option<usize>,
        max: Option<usize>,
        actual: usize,
    },

    /// Value does not have the expected shape.
    #[error("value has an invalid format")]
    FormatMismatch,

    /// Number is outside the inclusive bounds.
    #[error("number is out of range")]
    NumericOutOfRange { min: Option<f64>, max: Option<f64> },

    /// Password is shorter than 8 characters or lacks a digit or a symbol.
    #[error("password is too weak")]
    WeakPassword,

    /// Value cannot be parsed as a URL with a host.
    #[error("invalid URL")]
    InvalidUrl,

    /// No option (or an unknown option) is selected.
    #[error("no option selected")]
    UnselectedOption,

    /// Agreement checkbox is not checked.
    #[error("agreement not accepted")]
    UnacceptedAgreement,
}

impl ErrorKind {
    /// Stable identifier used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::LengthOutOfRange { .. } => "length_out_of_range",
            Self::FormatMismatch => "format_mismatch",
            Self::NumericOutOfRange { .. } => "numeric_out_of_range",
            Self::WeakPassword => "weak_password",
            Self::InvalidUrl => "invalid_url",
            Self::UnselectedOption => "unselected_option",
            Self::UnacceptedAgreement => "unaccepted_agreement",
        }
    }

    /// Returns `true` if this is a length error caused by a too-short value.
    pub fn is_too_short(&self) -> bool {
        match self {
            Self::LengthOutOfRange { min, actual, .. } => min.is_some_and(|min| *actual < min),
            _ => false,
        }
    }
}
