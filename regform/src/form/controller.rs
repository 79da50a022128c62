use log::{debug, info};
use serde::Serialize;
use tokio::runtime::Handle;

use super::feedback::FeedbackTimer;
use super::{FeedbackPhase, FormError, FormValues, SubmissionFeedbackState, ValidationErrorMap};
use crate::config::FormConfig;
use crate::validation::{FieldValue, FormSchema};

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    /// Every field passed validation.
    pub accepted: bool,
    /// Failing fields; empty when accepted.
    pub errors: ValidationErrorMap,
}

/// Holds the form's values, validates them on submit and owns the feedback
/// cycle.
///
/// Must be created inside a tokio runtime: the feedback expiry is a task on
/// that runtime. Dropping the controller cancels any pending expiry.
pub struct FormController {
    schema: FormSchema,
    config: FormConfig,
    values: FormValues,
    errors: ValidationErrorMap,
    timer: FeedbackTimer,
}

impl FormController {
    /// Create a controller with default values for every field.
    pub fn new(schema: FormSchema, config: FormConfig) -> Result<Self, FormError> {
        let runtime = Handle::try_current()?;
        let values = FormValues::defaults(&schema);
        let timer = FeedbackTimer::new(runtime, config.feedback_duration);
        debug!("Mounted form with {} fields", schema.len());
        Ok(Self {
            schema,
            config,
            values,
            errors: ValidationErrorMap::new(),
            timer,
        })
    }

    /// Controller for the conference registration form with default config.
    pub fn registration() -> Result<Self, FormError> {
        Self::new(FormSchema::registration(), FormConfig::default())
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current value of `field`.
    pub fn value(&self, field: &str) -> Result<&FieldValue, FormError> {
        self.values
            .get(field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))
    }

    /// Replace the value of `field`.
    pub fn set_value(&mut self, field: &str, value: FieldValue) -> Result<(), FormError> {
        let schema = self
            .schema
            .field(field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))?;
        if !value.matches_kind(schema.kind()) {
            return Err(FormError::KindMismatch {
                field: field.to_string(),
                expected: schema.kind().name(),
            });
        }
        self.values.set(field, value);
        Ok(())
    }

    /// Set `field` from raw renderer text, converted to the field's kind.
    pub fn set_input(&mut self, field: &str, raw: &str) -> Result<(), FormError> {
        let kind = self
            .schema
            .field(field)
            .map(|schema| schema.kind().clone())
            .ok_or_else(|| FormError::UnknownField(field.to_string()))?;
        self.set_value(field, FieldValue::parse(&kind, raw))
    }

    /// Validate every field and, if all pass, start a feedback cycle.
    ///
    /// The error map is rebuilt from scratch. An accepted submission clears
    /// it, captures the name field and re-arms the expiry; a rejected one
    /// leaves any running feedback cycle untouched.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = self.evaluate();

        if !self.errors.is_empty() {
            debug!(
                "Submission rejected: {} invalid field(s): {}",
                self.errors.len(),
                self.errors.fields().collect::<Vec<_>>().join(", ")
            );
            return SubmitOutcome {
                accepted: false,
                errors: self.errors.clone(),
            };
        }

        if self.config.log_submissions {
            info!("Submitted data: {}", self.values.redacted(&self.schema));
        }

        let name = self
            .values
            .get(&self.config.name_field)
            .map(FieldValue::display_text)
            .unwrap_or_default();
        self.timer.start(name);

        SubmitOutcome {
            accepted: true,
            errors: ValidationErrorMap::new(),
        }
    }

    /// Run every field's rules in schema order, one error per failing field.
    fn evaluate(&self) -> ValidationErrorMap {
        let mut errors = ValidationErrorMap::new();
        for field in self.schema.fields() {
            let default = field.default_value();
            let value = self.values.get(field.name()).unwrap_or(&default);
            if let Err(kind) = field.evaluate(value) {
                debug!("Field '{}' failed: {}", field.name(), kind.code());
                errors.insert(field.name(), kind);
            }
        }
        errors
    }

    /// Errors of the last submission attempt.
    pub fn errors(&self) -> &ValidationErrorMap {
        &self.errors
    }

    pub fn feedback(&self) -> SubmissionFeedbackState {
        self.timer.snapshot()
    }

    pub fn phase(&self) -> FeedbackPhase {
        if self.timer.is_active() {
            FeedbackPhase::FeedbackActive
        } else if !self.errors.is_empty() {
            FeedbackPhase::Invalid
        } else {
            FeedbackPhase::Idle
        }
    }

    /// Returns `true` once after each feedback change (shown, re-armed,
    /// expired). Renderers poll this to know when to redraw the banner.
    pub fn feedback_changed(&self) -> bool {
        self.timer.take_changed()
    }

    /// Restore default values and clear errors. Running feedback is kept.
    pub fn reset(&mut self) {
        self.values = FormValues::defaults(&self.schema);
        self.errors.clear();
    }

    /// Tear the form down, cancelling any pending feedback expiry.
    pub fn dispose(mut self) {
        self.timer.shutdown();
        debug!("Disposed form");
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("schema", &self.schema)
            .field("config", &self.config)
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("feedback", &self.feedback())
            .finish()
    }
}
