//! Field-level request validation for edit shapes.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Constraint on one edit-shape field. `field` is the name reported back to the client.
#[derive(Clone, Copy, Debug)]
pub struct ValidationRule {
    pub field: &'static str,
    pub required: bool,
    /// Maximum length in characters.
    pub max_length: usize,
}

impl ValidationRule {
    pub const fn required(field: &'static str, max_length: usize) -> Self {
        ValidationRule {
            field,
            required: true,
            max_length,
        }
    }

    pub const fn optional(field: &'static str, max_length: usize) -> Self {
        ValidationRule {
            field,
            required: false,
            max_length,
        }
    }
}

/// Accumulated validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was recorded, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for m in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, m)?;
                first = false;
            }
        }
        Ok(())
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Check every (rule, value) pair and record all violations; never stops at the first one.
    pub fn validate(fields: &[(ValidationRule, Option<&str>)], errors: &mut FieldErrors) {
        for (rule, value) in fields {
            validate_field(rule, *value, errors);
        }
    }
}

fn validate_field(rule: &ValidationRule, value: Option<&str>, errors: &mut FieldErrors) {
    let blank = value.map(|s| s.trim().is_empty()).unwrap_or(true);
    if rule.required && blank {
        errors.add(rule.field, format!("The {} field is required.", rule.field));
        return;
    }
    if let Some(s) = value {
        if s.chars().count() > rule.max_length {
            errors.add(
                rule.field,
                format!(
                    "The field {} must be a string with a maximum length of {}.",
                    rule.field, rule.max_length
                ),
            );
        }
    }
}
