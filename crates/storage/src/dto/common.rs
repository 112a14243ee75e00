use std::borrow::Cow;

use chrono::NaiveDate;
use validator::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Presence check used by request validation.
///
/// Mirrors the loose notion of "provided" the API has always used: numeric
/// zero and the empty string count as missing, so a zero weight or a zero
/// duration is rejected just like an absent one.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    // An empty list is still a provided list
    fn is_truthy(&self) -> bool {
        true
    }
}

pub fn is_present<T: Truthy>(value: &Option<T>) -> bool {
    value.as_ref().is_some_and(Truthy::is_truthy)
}

/// Keep a value only when it is truthy, storing null otherwise.
pub fn truthy_or_null<T: Truthy + Clone>(value: &Option<T>) -> Option<T> {
    value.as_ref().filter(|v| v.is_truthy()).cloned()
}

pub fn notes_or_null(notes: &Option<String>) -> Option<String> {
    truthy_or_null(notes)
}

pub fn missing_fields(message: &'static str) -> ValidationError {
    ValidationError::new("required").with_message(Cow::Borrowed(message))
}

/// Accept only zero-padded `YYYY-MM-DD`. Dates are compared as text when
/// ordering, so `2024-5-1` must not reach storage even though chrono parses it.
pub fn validate_calendar_date(date: &str) -> Result<(), ValidationError> {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) if parsed.format(DATE_FORMAT).to_string() == date => Ok(()),
        _ => Err(ValidationError::new("invalid_date")
            .with_message(Cow::Borrowed("Date must be formatted as YYYY-MM-DD"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_counts_as_missing() {
        assert!(!is_present(&Some(0.0_f64)));
        assert!(!is_present(&Some(0_i64)));
        assert!(!is_present(&Some(String::new())));
        assert!(!is_present::<f64>(&None));
    }

    #[test]
    fn test_non_zero_counts_as_present() {
        assert!(is_present(&Some(-1.5_f64)));
        assert!(is_present(&Some(45_i64)));
        assert!(is_present(&Some("2024-05-01".to_string())));
        assert!(is_present(&Some(Vec::<i64>::new())));
    }

    #[test]
    fn test_truthy_or_null_drops_zero() {
        assert_eq!(truthy_or_null(&Some(0_i64)), None);
        assert_eq!(truthy_or_null(&Some(5.0_f64)), Some(5.0));
        assert_eq!(notes_or_null(&Some(String::new())), None);
        assert_eq!(
            notes_or_null(&Some("felt strong".to_string())),
            Some("felt strong".to_string())
        );
    }

    #[test]
    fn test_calendar_date_format() {
        assert!(validate_calendar_date("2024-02-29").is_ok());
        assert!(validate_calendar_date("2023-02-29").is_err());
        assert!(validate_calendar_date("01/02/2024").is_err());
        assert!(validate_calendar_date("2024-05-01T10:00:00Z").is_err());
    }

    #[test]
    fn test_calendar_date_must_be_zero_padded() {
        assert!(validate_calendar_date("2024-05-01").is_ok());
        assert!(validate_calendar_date("2024-5-1").is_err());
        assert!(validate_calendar_date("2024-05-1").is_err());
        assert!(validate_calendar_date("+2024-05-01").is_err());
    }
}
