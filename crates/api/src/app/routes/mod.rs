use axum::{routing::get, Router};

pub mod companies;
pub mod export;
pub mod journal;
pub mod reports;
pub mod system;

/// Router for every engine operation.
pub fn router() -> Router {
    Router::new()
        .nest(
            "/companies",
            companies::router()
                .merge(journal::company_router())
                .merge(reports::company_router()),
        )
        .route("/transactions", get(journal::all_transactions))
        .nest("/reports/consolidated", reports::consolidated_router())
        .route("/export", get(export::snapshot))
}
