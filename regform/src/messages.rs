//! Presentation lookup from error kinds to user-facing prose.
//!
//! The validation core only returns [`ErrorKind`]s. Renderers pick a
//! [`MessageCatalog`] to turn them into the text shown under each field.

use crate::validation::ErrorKind;
use crate::validation::fields::{
    AGE, AGREE_TO_TERMS, EMAIL, FULL_NAME, TICKET_TYPE, USERNAME, WEBSITE_URL,
};

/// Maps validation outcomes to display text.
pub trait MessageCatalog: Send + Sync {
    /// Message shown under `field` for `kind`.
    fn message(&self, field: &str, kind: &ErrorKind) -> String;

    /// Banner text shown while the feedback cycle is active.
    fn success_banner(&self, name: &str) -> String;
}

/// English messages for the registration form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageCatalog for DefaultMessages {
    fn message(&self, field: &str, kind: &ErrorKind) -> String {
        match (field, kind) {
            (FULL_NAME, ErrorKind::MissingField) => "Full name is required".to_string(),
            (USERNAME, ErrorKind::MissingField) => "Username is required".to_string(),
            (USERNAME, ErrorKind::LengthOutOfRange { min: Some(min), .. }) if kind.is_too_short() => {
                format!("Username must be at least {min} characters")
            }
            (USERNAME, ErrorKind::LengthOutOfRange { max: Some(max), .. }) => {
                format!("Username must be at most {max} characters")
            }
            (EMAIL, ErrorKind::MissingField) => "Email is required".to_string(),
            (EMAIL, ErrorKind::FormatMismatch) => "Invalid email format".to_string(),
            (AGE, _) => "Participants must be between 18 and 100 years old".to_string(),
            (WEBSITE_URL, ErrorKind::InvalidUrl) => "Invalid URL format".to_string(),
            (TICKET_TYPE, ErrorKind::UnselectedOption) => "You must choose a ticket type".to_string(),
            (AGREE_TO_TERMS, ErrorKind::UnacceptedAgreement) => {
                "You must agree to the terms and conditions".to_string()
            }
            _ => generic_message(kind),
        }
    }

    fn success_banner(&self, name: &str) -> String {
        format!("Registration successful, {name}!")
    }
}

/// Field-independent fallback text for `kind`.
pub fn generic_message(kind: &ErrorKind) -> String {
    match kind {
        ErrorKind::MissingField => "This field is required".to_string(),
        ErrorKind::LengthOutOfRange { min, max, .. } => match (min, max) {
            (Some(min), Some(max)) => format!("Must be between {min} and {max} characters"),
            (Some(min), None) => format!("Must be at least {min} characters"),
            (None, Some(max)) => format!("Must be at most {max} characters"),
            (None, None) => "Invalid length".to_string(),
        },
        ErrorKind::FormatMismatch => "Invalid format".to_string(),
        ErrorKind::NumericOutOfRange { min, max } => match (min, max) {
            (Some(min), Some(max)) => format!("Must be between {min} and {max}"),
            (Some(min), None) => format!("Must be at least {min}"),
            (None, Some(max)) => format!("Must be at most {max}"),
            (None, None) => "Invalid number".to_string(),
        },
        ErrorKind::WeakPassword => {
            "Password must be 8+ characters and contain a number and a symbol".to_string()
        }
        ErrorKind::InvalidUrl => "Invalid URL format".to_string(),
        ErrorKind::UnselectedOption => "Please select an option".to_string(),
        ErrorKind::UnacceptedAgreement => "This box must be checked".to_string(),
    }
}
