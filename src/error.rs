//! Error types for the salary records service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the two failure kinds the service knows: an unknown record id and a
//! rejected request body.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation failure.
///
/// The `field` names the wire field (`amount`, `payDate`, `bonus`), not the
/// Rust field, so clients can match errors against the payload they sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The wire name of the offending field.
    pub field: String,
    /// What was wrong with the supplied value.
    pub message: String,
}

impl FieldError {
    /// Creates a field error for the given wire field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The main error type for the salary records service.
///
/// Every fallible store or validation operation returns this type. A failure
/// is always scoped to the single request that triggered it; nothing is
/// retried and nothing is fatal to the process.
///
/// # Example
///
/// ```
/// use salary_service::error::ServiceError;
///
/// let error = ServiceError::NotFound { id: 42 };
/// assert_eq!(error.to_string(), "Salary not found");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// No record in the collection matches the requested id.
    #[error("Salary not found")]
    NotFound {
        /// The id that matched no record.
        id: u64,
    },

    /// The request body failed field-level validation.
    #[error("Validation failed")]
    Validation {
        /// The individual field failures, in schema order.
        errors: Vec<FieldError>,
    },
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
