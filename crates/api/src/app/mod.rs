//! HTTP application wiring (axum router + shared state).
//!
//! Layout:
//! - `services.rs`: the registry behind its lock, one method per operation
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use finbooks_ledger::CompanyRegistry;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full router around a seeded registry (used by `main.rs` and
/// the black-box tests).
pub fn build_app(registry: CompanyRegistry) -> Router {
    let services = Arc::new(services::AppServices::new(registry));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
