use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use finbooks_core::CompanyId;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn company_router() -> Router {
    Router::new()
        .route("/:id/reports/balance-sheet", get(balance_sheet))
        .route("/:id/reports/income-statement", get(income_statement))
}

pub fn consolidated_router() -> Router {
    Router::new()
        .route("/balance-sheet", get(consolidated_balance_sheet))
        .route("/income-statement", get(consolidated_income_statement))
}

pub async fn balance_sheet(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CompanyId>,
) -> axum::response::Response {
    match services.balance_sheet(&id) {
        Ok(sheet) => (StatusCode::OK, Json(sheet)).into_response(),
        Err(e) => errors::ledger_error_response(e),
    }
}

pub async fn income_statement(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CompanyId>,
) -> axum::response::Response {
    match services.income_statement(&id) {
        Ok(statement) => (StatusCode::OK, Json(statement)).into_response(),
        Err(e) => errors::ledger_error_response(e),
    }
}

pub async fn consolidated_balance_sheet(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.consolidated_balance_sheet())).into_response()
}

pub async fn consolidated_income_statement(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(services.consolidated_income_statement()),
    )
        .into_response()
}
