//! Validation error types

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// One rule broken by one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name in its JSON spelling
    pub field: &'static str,
    /// What was expected
    pub reason: &'static str,
}

impl FieldViolation {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            reason: "is required",
        }
    }

    pub fn not_positive(field: &'static str) -> Self {
        Self {
            field,
            reason: "must be greater than 0",
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// A product failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_lists_every_violation() {
        let err = ValidationError {
            violations: vec![
                FieldViolation::required("ProductName"),
                FieldViolation::not_positive("ProductPrice"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "validation failed: ProductName is required, ProductPrice must be greater than 0"
        );
    }
}
