//! Form validation.
//!
//! A [`Validator`] accumulates field-keyed error messages plus independent
//! non-field errors; every check for a form runs even after an earlier
//! failure, so all messages are collected before the caller inspects
//! [`Validator::is_valid`]. The predicates are pure functions of input and
//! constraints.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Email pattern used for form validation (the WHATWG HTML5 input pattern).
pub static EMAIL_RX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex is valid")
});

/// Accumulates validation errors for a form.
///
/// Field errors keep the first message recorded per field; non-field errors
/// are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    field_errors: BTreeMap<String, String>,
    non_field_errors: Vec<String>,
}

impl Validator {
    /// Create an empty validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no field or non-field error has been recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.non_field_errors.is_empty()
    }

    /// Record a field error unless the field already has one.
    pub fn add_field_error(&mut self, field: &str, message: &str) {
        self.field_errors
            .entry(field.to_owned())
            .or_insert_with(|| message.to_owned());
    }

    /// Record a form-level error not tied to any field.
    pub fn add_non_field_error(&mut self, message: &str) {
        self.non_field_errors.push(message.to_owned());
    }

    /// Record a field error if `ok` is false. Never aborts.
    pub fn check_field(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_field_error(field, message);
        }
    }

    /// The recorded error for a field, if any.
    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// All recorded non-field errors.
    #[must_use]
    pub fn non_field_errors(&self) -> &[String] {
        &self.non_field_errors
    }
}

/// True if the value contains at least one non-whitespace character.
#[must_use]
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True if the value contains at most `n` Unicode characters.
#[must_use]
pub fn max_chars(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

/// True if the value contains at least `n` Unicode characters.
#[must_use]
pub fn min_chars(value: &str, n: usize) -> bool {
    value.chars().count() >= n
}

/// True if `lo <= value <= hi`.
#[must_use]
pub const fn permitted_int_range(value: i32, lo: i32, hi: i32) -> bool {
    lo <= value && value <= hi
}

/// True if the value matches the pattern.
#[must_use]
pub fn matches(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validator_is_valid() {
        assert!(Validator::new().is_valid());
    }

    #[test]
    fn test_valid_iff_nothing_recorded() {
        let mut v = Validator::new();
        v.check_field(true, "title", "unused");
        assert!(v.is_valid());

        v.check_field(false, "title", "This field cannot be blank");
        assert!(!v.is_valid());

        let mut v = Validator::new();
        v.add_non_field_error("Email or password is incorrect");
        assert!(!v.is_valid());

        let mut v = Validator::new();
        v.add_field_error("email", "Email address is already in use");
        assert!(!v.is_valid());
    }

    #[test]
    fn test_first_field_error_wins() {
        let mut v = Validator::new();
        v.check_field(false, "title", "first");
        v.check_field(false, "title", "second");
        assert_eq!(v.field_error("title"), Some("first"));
    }

    #[test]
    fn test_all_checks_run() {
        let mut v = Validator::new();
        v.check_field(false, "title", "blank");
        v.check_field(false, "cards_number", "range");
        assert_eq!(v.field_error("title"), Some("blank"));
        assert_eq!(v.field_error("cards_number"), Some("range"));
    }

    #[test]
    fn test_non_field_errors_keep_order() {
        let mut v = Validator::new();
        v.add_non_field_error("one");
        v.add_non_field_error("two");
        assert_eq!(v.non_field_errors(), ["one", "two"]);
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello"));
        assert!(not_blank("  x  "));
        assert!(!not_blank(""));
        assert!(!not_blank("   "));
        assert!(!not_blank("\t\n"));
    }

    #[test]
    fn test_max_chars_counts_characters() {
        assert!(max_chars("abc", 3));
        assert!(!max_chars("abcd", 3));
        // four characters, more than four bytes
        assert!(max_chars("żółć", 4));
    }

    #[test]
    fn test_min_chars() {
        assert!(min_chars("password", 8));
        assert!(!min_chars("short", 8));
    }

    #[test]
    fn test_permitted_int_range_boundaries() {
        assert!(permitted_int_range(3, 3, 10));
        assert!(permitted_int_range(10, 3, 10));
        assert!(permitted_int_range(5, 3, 10));
        assert!(!permitted_int_range(2, 3, 10));
        assert!(!permitted_int_range(11, 3, 10));
    }

    #[test]
    fn test_email_rx() {
        assert!(matches("user@example.com", &EMAIL_RX));
        assert!(matches("user.name+tag@sub.example.co.uk", &EMAIL_RX));
        assert!(!matches("", &EMAIL_RX));
        assert!(!matches("not-an-email", &EMAIL_RX));
        assert!(!matches("user@", &EMAIL_RX));
        assert!(!matches("@example.com", &EMAIL_RX));
        assert!(!matches("user@example com", &EMAIL_RX));
    }
}
