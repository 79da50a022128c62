//! Field rules of the registration form.

use regform::validation::fields::{
    AGE, AGREE_TO_TERMS, EMAIL, FULL_NAME, PASSWORD, TICKET_TYPE, USERNAME, WEBSITE_URL,
};
use regform::validation::{ErrorKind, FieldSchema, FieldValue, FormSchema};

fn field(name: &str) -> FieldSchema {
    FormSchema::registration()
        .field(name)
        .cloned()
        .unwrap_or_else(|| panic!("missing field {name}"))
}

fn eval(name: &str, value: FieldValue) -> Result<(), ErrorKind> {
    field(name).evaluate(&value)
}

#[test]
fn test_required_fields_reject_empty_values() {
    let schema = FormSchema::registration();
    for field in schema.fields().iter().filter(|f| f.is_required()) {
        let result = field.evaluate(&field.default_value());
        assert!(result.is_err(), "{} accepted an empty value", field.name());
    }
}

#[test]
fn test_full_name_whitespace_is_missing() {
    assert_eq!(eval(FULL_NAME, FieldValue::text("   ")), Err(ErrorKind::MissingField));
    assert_eq!(eval(FULL_NAME, FieldValue::text("Jane Doe")), Ok(()));
}

#[test]
fn test_username_length_boundaries() {
    assert!(matches!(
        eval(USERNAME, FieldValue::text("abcde")),
        Err(ErrorKind::LengthOutOfRange { actual: 5, .. })
    ));
    assert_eq!(eval(USERNAME, FieldValue::text("abcdef")), Ok(()));
    assert_eq!(eval(USERNAME, FieldValue::text("a".repeat(20))), Ok(()));
    assert!(matches!(
        eval(USERNAME, FieldValue::text("a".repeat(21))),
        Err(ErrorKind::LengthOutOfRange { actual: 21, .. })
    ));
}

#[test]
fn test_email_shape() {
    assert_eq!(eval(EMAIL, FieldValue::text("")), Err(ErrorKind::MissingField));
    assert_eq!(eval(EMAIL, FieldValue::text("jane@example.com")), Ok(()));
    assert_eq!(eval(EMAIL, FieldValue::text("jane.example.com")), Err(ErrorKind::FormatMismatch));
    assert_eq!(eval(EMAIL, FieldValue::text("jane@example")), Err(ErrorKind::FormatMismatch));
}

#[test]
fn test_password_complexity() {
    assert_eq!(eval(PASSWORD, FieldValue::text("")), Err(ErrorKind::WeakPassword));
    assert_eq!(eval(PASSWORD, FieldValue::text("abcdefgh")), Err(ErrorKind::WeakPassword));
    assert_eq!(eval(PASSWORD, FieldValue::text("abcdefg1")), Err(ErrorKind::WeakPassword));
    assert_eq!(eval(PASSWORD, FieldValue::text("abcdefg!")), Err(ErrorKind::WeakPassword));
    assert_eq!(eval(PASSWORD, FieldValue::text("ab1!")), Err(ErrorKind::WeakPassword));
    assert_eq!(eval(PASSWORD, FieldValue::text("abc123!@")), Ok(()));
}

#[test]
fn test_age_boundaries() {
    let out_of_range = Err(ErrorKind::NumericOutOfRange {
        min: Some(18.0),
        max: Some(100.0),
    });
    assert_eq!(eval(AGE, FieldValue::number(17.0)), out_of_range);
    assert_eq!(eval(AGE, FieldValue::number(18.0)), Ok(()));
    assert_eq!(eval(AGE, FieldValue::number(100.0)), Ok(()));
    assert_eq!(eval(AGE, FieldValue::number(101.0)), out_of_range);
    assert_eq!(eval(AGE, FieldValue::Number(None)), Err(ErrorKind::MissingField));
    assert_eq!(eval(AGE, FieldValue::number(30.5)), Err(ErrorKind::FormatMismatch));
}

#[test]
fn test_website_url_is_optional() {
    assert!(!field(WEBSITE_URL).is_required());
    assert_eq!(eval(WEBSITE_URL, FieldValue::text("")), Ok(()));
    assert_eq!(eval(WEBSITE_URL, FieldValue::text("example.com")), Ok(()));
    assert_eq!(eval(WEBSITE_URL, FieldValue::text("https://example.com")), Ok(()));
    assert_eq!(eval(WEBSITE_URL, FieldValue::text("not a url")), Err(ErrorKind::InvalidUrl));
}

#[test]
fn test_ticket_type_selection() {
    assert_eq!(eval(TICKET_TYPE, FieldValue::Choice(None)), Err(ErrorKind::UnselectedOption));
    assert_eq!(eval(TICKET_TYPE, FieldValue::choice("VIP")), Ok(()));
    assert_eq!(eval(TICKET_TYPE, FieldValue::choice("General Access")), Ok(()));
    assert_eq!(eval(TICKET_TYPE, FieldValue::choice("Platinum")), Err(ErrorKind::UnselectedOption));
}

#[test]
fn test_terms_must_be_accepted() {
    assert_eq!(
        eval(AGREE_TO_TERMS, FieldValue::Flag(false)),
        Err(ErrorKind::UnacceptedAgreement)
    );
    assert_eq!(eval(AGREE_TO_TERMS, FieldValue::Flag(true)), Ok(()));
}
