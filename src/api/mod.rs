//! HTTP API module for the salary records service.
//!
//! This module provides the REST endpoints for listing, fetching, creating,
//! updating, and deleting salary records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateSalaryRequest, UpdateSalaryRequest};
pub use response::{AckResponse, ApiError, ListResponse, RecordResponse};
pub use state::AppState;
