//! Product validator
//!
//! Stateless and deterministic: the same product always yields the same
//! violations, in header order.

use super::errors::{FieldViolation, ValidationError};
use crate::storage::{Product, HEADER};

/// Validates products submitted through the API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductValidator;

impl ProductValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks every rule and returns all violations at once.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing each empty text field and each
    /// money field that is not a finite number above zero.
    pub fn validate(&self, product: &Product) -> Result<(), ValidationError> {
        let mut violations: Vec<FieldViolation> = product
            .text_fields()
            .iter()
            .zip(HEADER)
            .filter(|(value, _)| value.is_empty())
            .map(|(_, field)| FieldViolation::required(field))
            .collect();

        for (value, field) in [(product.cost, HEADER[9]), (product.price, HEADER[10])] {
            if !(value.is_finite() && value > 0.0) {
                violations.push(FieldViolation::not_positive(field));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}
