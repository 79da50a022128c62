//! Field validation for the registration form.
//!
//! Every field is described by a [`FieldSchema`] that evaluates one
//! [`FieldValue`] in isolation. Rules run in a fixed order (required, then
//! format/length/range, then the custom rule) and stop at the first failure,
//! so a field reports at most one [`ErrorKind`].
//!
//! # Example
//!
//! ```ignore
//! use regform::validation::{ErrorKind, FieldSchema, FieldValue};
//!
//! let username = FieldSchema::text("username", "Username")
//!     .required()
//!     .length(6, 20);
//!
//! assert!(username.evaluate(&FieldValue::text("janedoe")).is_ok());
//! assert!(matches!(
//!     username.evaluate(&FieldValue::text("jane")),
//!     Err(ErrorKind::LengthOutOfRange { .. })
//! ));
//! ```

mod error_kind;
pub mod rules;
mod schema;
mod value;

pub use error_kind::ErrorKind;
pub use schema::{CustomRule, FieldKind, FieldSchema, FormSchema, SchemaError, fields, TICKET_TYPES};
pub use value::FieldValue;
