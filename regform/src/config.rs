//! Form controller configuration.

use std::time::Duration;

use crate::validation::fields::FULL_NAME;

/// How long the success feedback stays visible after a valid submission.
pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_millis(3000);

/// Per-form configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Lifetime of one feedback cycle.
    pub feedback_duration: Duration,

    /// Field whose value is captured as the submitted name.
    pub name_field: String,

    /// Log accepted submissions (sensitive fields redacted).
    pub log_submissions: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            feedback_duration: DEFAULT_FEEDBACK_DURATION,
            name_field: FULL_NAME.to_string(),
            log_submissions: true,
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the feedback cycle duration.
    pub fn feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback_duration = duration;
        self
    }

    /// Set the field captured as the submitted name.
    pub fn name_field(mut self, field: impl Into<String>) -> Self {
        self.name_field = field.into();
        self
    }

    /// Enable or disable logging of accepted submissions.
    pub fn log_submissions(mut self, enabled: bool) -> Self {
        self.log_submissions = enabled;
        self
    }
}
