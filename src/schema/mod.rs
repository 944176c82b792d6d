//! Product validation for catalogdb
//!
//! Request bodies are validated before they reach the store.
//!
//! # Rules
//!
//! - Every text field is required and non-empty
//! - `ProductCost` and `ProductPrice` must be finite and greater than zero
//! - All violations are reported, not just the first

mod errors;
mod validator;

pub use errors::{FieldViolation, ValidationError};
pub use validator::ProductValidator;
