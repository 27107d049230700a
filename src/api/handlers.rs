//! HTTP request handlers for the salary records API.
//!
//! This module contains the handler functions for all five endpoints and the
//! router factory the host process mounts under its path prefix.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{NewSalary, SalaryPatch};
use crate::validation::{validate_new, validate_patch};

use super::request::{CreateSalaryRequest, UpdateSalaryRequest};
use super::response::{AckResponse, ApiErrorResponse, ListResponse, RecordResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// The routes are relative to whatever prefix the host mounts this router
/// under (e.g. `/salary`).
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_salaries).post(create_salary))
        .route(
            "/:id",
            get(get_salary).put(update_salary).delete(delete_salary),
        )
        .with_state(state)
}

/// Parses a path id.
///
/// Non-numeric (or out-of-range) input is not a parse error at the API
/// surface: it simply matches no record and surfaces as the 404.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

/// Maps a body rejected during deserialization to the 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let message = match rejection {
        JsonRejection::JsonDataError(err) => err.body_text(),
        JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
        JsonRejection::MissingJsonContentType(_) => {
            "Content-Type must be application/json".to_string()
        }
        _ => "Failed to parse request body".to_string(),
    };
    warn!(
        correlation_id = %correlation_id,
        error = %message,
        "Request body rejected"
    );
    ApiErrorResponse::bad_request(message).into_response()
}

/// Handler for GET `/`.
///
/// Returns the full collection in insertion order. No failure mode.
async fn list_salaries(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let store = state.store().read().expect("store lock poisoned");
    info!(
        correlation_id = %correlation_id,
        count = store.len(),
        "Listing salary records"
    );
    Json(ListResponse::new(store.records().to_vec())).into_response()
}

/// Handler for GET `/:id`.
async fn get_salary(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let store = state.store().read().expect("store lock poisoned");

    match parse_id(&raw_id).and_then(|id| store.find(id)) {
        Some(record) => {
            info!(correlation_id = %correlation_id, id = record.id, "Salary record fetched");
            Json(RecordResponse::fetched(record.clone())).into_response()
        }
        None => {
            warn!(correlation_id = %correlation_id, id = %raw_id, "Salary not found");
            ApiErrorResponse::not_found().into_response()
        }
    }
}

/// Handler for POST `/`.
///
/// Validates the candidate body before touching the store; a rejected body
/// never mutates the collection.
async fn create_salary(
    State(state): State<AppState>,
    payload: Result<Json<CreateSalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let new: NewSalary = request.into();
    if let Err(err) = validate_new(&new) {
        warn!(correlation_id = %correlation_id, error = %err, "Create request rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    let mut store = state.store().write().expect("store lock poisoned");
    let record = store.insert(new).clone();
    info!(
        correlation_id = %correlation_id,
        id = record.id,
        count = store.len(),
        "Salary record created"
    );
    (StatusCode::CREATED, Json(RecordResponse::created(record))).into_response()
}

/// Handler for PUT `/:id`.
///
/// Validation runs first, so a bad body yields the 400 even for an unknown
/// id; a not-found then short-circuits before any mutation.
async fn update_salary(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateSalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let patch: SalaryPatch = request.into();
    if let Err(err) = validate_patch(&patch) {
        warn!(correlation_id = %correlation_id, error = %err, "Update request rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    let Some(id) = parse_id(&raw_id) else {
        warn!(correlation_id = %correlation_id, id = %raw_id, "Salary not found");
        return ApiErrorResponse::not_found().into_response();
    };

    let mut store = state.store().write().expect("store lock poisoned");
    match store.update(id, patch) {
        Ok(record) => {
            let record = record.clone();
            info!(correlation_id = %correlation_id, id = record.id, "Salary record updated");
            Json(RecordResponse::updated(record)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, id = id, "Salary not found");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE `/:id`.
async fn delete_salary(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let Some(id) = parse_id(&raw_id) else {
        warn!(correlation_id = %correlation_id, id = %raw_id, "Salary not found");
        return ApiErrorResponse::not_found().into_response();
    };

    let mut store = state.store().write().expect("store lock poisoned");
    match store.remove(id) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                id = id,
                count = store.len(),
                "Salary record deleted"
            );
            Json(AckResponse::deleted()).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, id = id, "Salary not found");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
