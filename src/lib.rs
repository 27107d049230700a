//! In-memory salary records REST service.
//!
//! This crate provides a CRUD resource handler for salary records backed by a
//! process-local in-memory store. It exposes an axum router that a host
//! process mounts under a path prefix (e.g. `/salary`); process startup,
//! port binding, and routing for sibling resources are the host's
//! responsibility.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;
