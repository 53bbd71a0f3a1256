//! Itemized validation for incoming payloads
//!
//! A field is in violation when its key is missing or its value trims to
//! empty; both cases produce the same `<field> is empty` item, so clients see
//! one message regardless of how the field was omitted.

use std::fmt;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is empty", self.field)
    }
}

/// Collected field errors for one payload.
///
/// Exposes both validation contracts: `is_empty` is the boolean pass/fail,
/// `messages` the itemized list. `Display` joins the items for the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Record a violation for `field`.
    pub fn push(&mut self, field: &'static str) {
        self.errors.push(FieldError { field });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// One message per violating field, in payload-field order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::to_string).collect()
    }

    /// `Ok(())` when no check failed, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Check that `value` is present and non-empty after trimming whitespace.
pub(crate) fn require(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    match value {
        Some(v) if !v.trim().is_empty() => {}
        _ => errors.push(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_blank_are_both_violations() {
        let mut errors = ValidationErrors::default();
        require(&mut errors, "title", None);
        require(&mut errors, "content", Some("   "));
        require(&mut errors, "category", Some("general"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.messages(), vec!["title is empty", "content is empty"]);
    }

    #[test]
    fn display_joins_messages() {
        let mut errors = ValidationErrors::default();
        errors.push("title");
        errors.push("content");
        assert_eq!(errors.to_string(), "title is empty, content is empty");
    }

    #[test]
    fn into_result_passes_clean_payloads() {
        let mut errors = ValidationErrors::default();
        require(&mut errors, "title", Some("Hello"));
        assert!(errors.clone().into_result().is_ok());
        assert!(errors.is_empty());
    }

    #[test]
    fn whitespace_only_value_fails() {
        let mut errors = ValidationErrors::default();
        require(&mut errors, "text", Some(" \t\n"));
        assert!(errors.clone().into_result().is_err());
    }
}
