//! Renderer-facing binding interface.

use super::{FormController, FormError, SubmissionFeedbackState, SubmitOutcome, ValidationErrorMap};
use crate::validation::{FieldValue, FormSchema};

/// What a renderer needs from a form: read and write field values, trigger
/// submission, and observe errors and feedback.
///
/// Renderers are generic over this trait so they never depend on how values
/// are stored or validated.
pub trait FormBinding {
    /// Schema the renderer binds inputs to.
    fn schema(&self) -> &FormSchema;

    fn get_value(&self, field: &str) -> Result<&FieldValue, FormError>;

    fn set_value(&mut self, field: &str, value: FieldValue) -> Result<(), FormError>;

    /// Set a field from raw input text.
    fn set_input(&mut self, field: &str, raw: &str) -> Result<(), FormError>;

    /// Validate and submit. Only call in response to an explicit user action.
    fn submit(&mut self) -> SubmitOutcome;

    fn errors(&self) -> &ValidationErrorMap;

    fn feedback(&self) -> SubmissionFeedbackState;

    /// Returns `true` once after each feedback change.
    fn feedback_changed(&self) -> bool;
}

impl FormBinding for FormController {
    fn schema(&self) -> &FormSchema {
        FormController::schema(self)
    }

    fn get_value(&self, field: &str) -> Result<&FieldValue, FormError> {
        self.value(field)
    }

    fn set_value(&mut self, field: &str, value: FieldValue) -> Result<(), FormError> {
        FormController::set_value(self, field, value)
    }

    fn set_input(&mut self, field: &str, raw: &str) -> Result<(), FormError> {
        FormController::set_input(self, field, raw)
    }

    fn submit(&mut self) -> SubmitOutcome {
        FormController::submit(self)
    }

    fn errors(&self) -> &ValidationErrorMap {
        FormController::errors(self)
    }

    fn feedback(&self) -> SubmissionFeedbackState {
        FormController::feedback(self)
    }

    fn feedback_changed(&self) -> bool {
        FormController::feedback_changed(self)
    }
}
