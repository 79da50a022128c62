//! Single-rule evaluators.
//!
//! Each function checks one property of one value and returns `Ok(())` or
//! the [`ErrorKind`] describing the failure. None of them panic on malformed
//! input; malformed input is what they detect.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::{ErrorKind, FieldValue};

/// Result of evaluating a single rule.
pub type RuleResult = Result<(), ErrorKind>;

/// Minimum password length in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Characters that count as a password symbol.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>_-\\[]/~`+=;";

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot in the domain.
pub static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Fail with `MissingField` if the value is empty, whitespace-only, unset or
/// unchecked.
pub fn required_check(value: &FieldValue) -> RuleResult {
    if value.is_missing() {
        Err(ErrorKind::MissingField)
    } else {
        Ok(())
    }
}

/// Fail with `LengthOutOfRange` if the character count is below `min` or above `max`.
pub fn length_check(value: &str, min: Option<usize>, max: Option<usize>) -> RuleResult {
    let actual = value.chars().count();
    let too_short = min.is_some_and(|min| actual < min);
    let too_long = max.is_some_and(|max| actual > max);
    if too_short || too_long {
        Err(ErrorKind::LengthOutOfRange { min, max, actual })
    } else {
        Ok(())
    }
}

/// Fail with `FormatMismatch` if the value does not match `pattern`.
pub fn pattern_check(value: &str, pattern: &Regex) -> RuleResult {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ErrorKind::FormatMismatch)
    }
}

/// Fail with `NumericOutOfRange` if the number is outside `[min, max]`.
pub fn range_check(value: f64, min: Option<f64>, max: Option<f64>) -> RuleResult {
    let below = min.is_some_and(|min| value < min);
    let above = max.is_some_and(|max| value > max);
    if below || above || value.is_nan() {
        Err(ErrorKind::NumericOutOfRange { min, max })
    } else {
        Ok(())
    }
}

/// Fail with `FormatMismatch` if the number has a fractional part.
pub fn integer_check(value: f64) -> RuleResult {
    if value.fract() == 0.0 {
        Ok(())
    } else {
        Err(ErrorKind::FormatMismatch)
    }
}

/// Fail with `WeakPassword` unless the value has at least 8 characters, a
/// digit and a symbol from [`PASSWORD_SYMBOLS`].
pub fn password_complexity(value: &str) -> RuleResult {
    let long_enough = value.chars().count() >= PASSWORD_MIN_LENGTH;
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    if long_enough && has_digit && has_symbol {
        Ok(())
    } else {
        Err(ErrorKind::WeakPassword)
    }
}

/// Pass on empty input; otherwise fail with `InvalidUrl` unless the value,
/// prefixed with `https://` when it has no scheme, parses as a URL with a host.
pub fn optional_url_check(value: &str) -> RuleResult {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let candidate = normalize_url(value);
    match Url::parse(&candidate) {
        Ok(url) if url.host_str().is_some_and(|host| !host.is_empty()) => Ok(()),
        _ => Err(ErrorKind::InvalidUrl),
    }
}

/// Prefix `https://` unless the value already carries an http(s) scheme.
pub fn normalize_url(value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{value}")
    }
}

/// Fail with `UnselectedOption` if nothing is selected or the selection is
/// not one of `options`.
pub fn option_check(value: Option<&str>, options: &[String]) -> RuleResult {
    match value {
        Some(selected) if options.iter().any(|option| option == selected) => Ok(()),
        _ => Err(ErrorKind::UnselectedOption),
    }
}

/// Fail with `UnacceptedAgreement` if the checkbox is not checked.
pub fn agreement_check(checked: bool) -> RuleResult {
    if checked {
        Ok(())
    } else {
        Err(ErrorKind::UnacceptedAgreement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_check() {
        assert_eq!(required_check(&FieldValue::text("")), Err(ErrorKind::MissingField));
        assert_eq!(required_check(&FieldValue::text(" \t")), Err(ErrorKind::MissingField));
        assert_eq!(required_check(&FieldValue::text("Jane")), Ok(()));
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(length_check("ñandú1", Some(6), Some(20)), Ok(()));
        assert_eq!(
            length_check("abcde", Some(6), Some(20)),
            Err(ErrorKind::LengthOutOfRange {
                min: Some(6),
                max: Some(20),
                actual: 5
            })
        );
    }

    #[test]
    fn test_email_pattern() {
        assert!(pattern_check("jane@example.com", &EMAIL_PATTERN).is_ok());
        assert!(pattern_check("jane@localhost", &EMAIL_PATTERN).is_err());
        assert!(pattern_check("jane doe@example.com", &EMAIL_PATTERN).is_err());
        assert!(pattern_check("jane@@example.com", &EMAIL_PATTERN).is_err());
        assert!(pattern_check("@example.com", &EMAIL_PATTERN).is_err());
    }

    #[test]
    fn test_range_check_inclusive() {
        assert!(range_check(18.0, Some(18.0), Some(100.0)).is_ok());
        assert!(range_check(100.0, Some(18.0), Some(100.0)).is_ok());
        assert!(range_check(17.0, Some(18.0), Some(100.0)).is_err());
        assert!(range_check(f64::NAN, None, None).is_err());
    }

    #[test]
    fn test_integer_check() {
        assert!(integer_check(30.0).is_ok());
        assert_eq!(integer_check(30.5), Err(ErrorKind::FormatMismatch));
    }

    #[test]
    fn test_password_complexity() {
        assert_eq!(password_complexity(""), Err(ErrorKind::WeakPassword));
        assert_eq!(password_complexity("abcdefgh"), Err(ErrorKind::WeakPassword));
        assert_eq!(password_complexity("abcdefg1"), Err(ErrorKind::WeakPassword));
        assert_eq!(password_complexity("abcdefg!"), Err(ErrorKind::WeakPassword));
        assert_eq!(password_complexity("ab1!"), Err(ErrorKind::WeakPassword));
        assert_eq!(password_complexity("abc123!@"), Ok(()));
        assert_eq!(password_complexity("Secret1!"), Ok(()));
        assert_eq!(password_complexity("secret1\\"), Ok(()));
    }

    #[test]
    fn test_optional_url_check() {
        assert_eq!(optional_url_check(""), Ok(()));
        assert_eq!(optional_url_check("   "), Ok(()));
        assert_eq!(optional_url_check("example.com"), Ok(()));
        assert_eq!(optional_url_check("http://example.com/path"), Ok(()));
        assert_eq!(optional_url_check("not a url"), Err(ErrorKind::InvalidUrl));
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_option_check() {
        let options = vec!["VIP".to_string(), "Student".to_string()];
        assert_eq!(option_check(Some("VIP"), &options), Ok(()));
        assert_eq!(option_check(None, &options), Err(ErrorKind::UnselectedOption));
        assert_eq!(option_check(Some("Gold"), &options), Err(ErrorKind::UnselectedOption));
    }

    #[test]
    fn test_agreement_check() {
        assert_eq!(agreement_check(true), Ok(()));
        assert_eq!(agreement_check(false), Err(ErrorKind::UnacceptedAgreement));
    }
}
