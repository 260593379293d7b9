use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use finbooks_core::CompanyId;
use finbooks_ledger::vat;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn company_router() -> Router {
    Router::new().route(
        "/:id/transactions",
        get(get_history).post(post_transaction),
    )
}

pub async fn post_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CompanyId>,
    Json(body): Json<dto::PostTransactionRequest>,
) -> axum::response::Response {
    let entries = dto::to_entry_inputs(body.entries);
    let vat_rate = body.vat_rate.unwrap_or(vat::DEFAULT);

    match services.post_transaction(&id, body.date, &body.description, &entries, vat_rate) {
        Ok(transaction_id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "transaction_id": transaction_id })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_response(e),
    }
}

pub async fn get_history(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CompanyId>,
) -> axum::response::Response {
    match services.history(&id) {
        Ok(rows) => (StatusCode::OK, Json(serde_json::json!({ "items": rows }))).into_response(),
        Err(e) => errors::ledger_error_response(e),
    }
}

/// Flattened history across every company, registry order.
pub async fn all_transactions(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let rows = services.combined_history();
    (StatusCode::OK, Json(serde_json::json!({ "items": rows }))).into_response()
}
