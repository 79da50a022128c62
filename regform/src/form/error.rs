use thiserror::Error;

/// Errors raised by misuse of the form controller.
///
/// Validation failures are not errors; they are reported through
/// [`ValidationErrorMap`](super::ValidationErrorMap).
#[derive(Debug, Error)]
pub enum FormError {
    /// The field is not part of the form schema.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The value does not have the field's kind.
    #[error("field '{field}' expects a {expected} value")]
    KindMismatch {
        field: String,
        expected: &'static str,
    },

    /// The controller was created outside a tokio runtime.
    #[error("form controller requires a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
