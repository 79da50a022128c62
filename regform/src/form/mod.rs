//! Form controller for the registration form.
//!
//! The controller holds the current [`FormValues`], validates every field on
//! [`submit`](FormController::submit), and runs the success feedback cycle:
//! a valid submission shows feedback that expires on its own after the
//! configured duration, and a newer valid submission replaces the pending
//! expiry instead of racing it.
//!
//! # Example
//!
//! ```ignore
//! use regform::prelude::*;
//! use regform::validation::fields;
//!
//! let mut form = FormController::new(FormSchema::registration(), FormConfig::default())?;
//! form.set_value(fields::FULL_NAME, FieldValue::text("Jane Doe"))?;
//! // ...
//! let outcome = form.submit();
//! if outcome.accepted {
//!     assert_eq!(form.feedback().submitted_name, "Jane Doe");
//! }
//! ```

mod binding;
mod controller;
mod error;
mod errors;
mod feedback;
mod values;

pub use binding::FormBinding;
pub use controller::{FormController, SubmitOutcome};
pub use error::FormError;
pub use errors::{FieldError, ValidationErrorMap};
pub use feedback::{FeedbackPhase, SubmissionFeedbackState};
pub use values::FormValues;
