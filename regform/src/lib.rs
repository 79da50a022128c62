//! Conference registration form: field validation and submission feedback.
//!
//! The [`validation`] module evaluates single field values against a
//! declarative [`FieldSchema`](validation::FieldSchema). The [`form`] module
//! holds the current values, aggregates per-field errors on submit and runs
//! the timed "registration succeeded" feedback cycle.

pub mod config;
pub mod form;
pub mod messages;
pub mod state;
pub mod validation;

pub mod prelude {
    pub use crate::config::FormConfig;
    pub use crate::form::{
        FeedbackPhase, FieldError, FormBinding, FormController, FormError, FormValues,
        SubmissionFeedbackState, SubmitOutcome, ValidationErrorMap,
    };
    pub use crate::messages::{DefaultMessages, MessageCatalog};
    pub use crate::validation::{ErrorKind, FieldKind, FieldSchema, FieldValue, FormSchema};
}
