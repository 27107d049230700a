//! Response types for the salary records API.
//!
//! Every response body carries a top-level `success` boolean. This module
//! defines the success envelopes, the error body, and the mapping from
//! [`ServiceError`] to an HTTP status plus error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, ServiceError};
use crate::models::SalaryRecord;

/// Response body for the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// Always true for this endpoint; listing has no failure mode.
    pub success: bool,
    /// Number of records, always equal to `data.len()`.
    pub count: usize,
    /// The full collection in insertion order.
    pub data: Vec<SalaryRecord>,
}

impl ListResponse {
    /// Builds the list envelope around the given records.
    pub fn new(data: Vec<SalaryRecord>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Response body carrying a single record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Operation acknowledgment, present on create and update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The record in question.
    pub data: SalaryRecord,
}

impl RecordResponse {
    /// Envelope for a successful get-by-id.
    pub fn fetched(data: SalaryRecord) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Envelope for a successful create.
    pub fn created(data: SalaryRecord) -> Self {
        Self {
            success: true,
            message: Some("Created successfully".to_string()),
            data,
        }
    }

    /// Envelope for a successful update.
    pub fn updated(data: SalaryRecord) -> Self {
        Self {
            success: true,
            message: Some("Updated successfully".to_string()),
            data,
        }
    }
}

/// Response body for a successful delete, which carries no data payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Operation acknowledgment.
    pub message: String,
}

impl AckResponse {
    /// Envelope for a successful delete.
    pub fn deleted() -> Self {
        Self {
            success: true,
            message: "Deleted successfully".to_string(),
        }
    }
}

/// API error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always false for error bodies.
    pub success: bool,
    /// Human-readable error message.
    pub message: String,
    /// Field-level failures, present only for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Creates the not-found error body.
    pub fn not_found() -> Self {
        Self {
            success: false,
            message: "Salary not found".to_string(),
            errors: None,
        }
    }

    /// Creates a validation error body with structured field errors.
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: "Validation failed".to_string(),
            errors: Some(errors),
        }
    }

    /// Creates an error body for a request rejected before validation,
    /// such as malformed JSON or a type mismatch.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}

/// API error paired with its HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// The 404 response used by get, update, and delete.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: ApiError::not_found(),
        }
    }

    /// A 400 response for a body rejected during deserialization.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::bad_request(message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::NotFound { .. } => Self::not_found(),
            ServiceError::Validation { errors } => Self {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation(errors),
            },
        }
    }
}
