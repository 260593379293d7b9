use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use finbooks_core::CompanyId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_companies).post(add_company))
        .route("/:id/chart", get(get_chart))
        .route("/:id/reset", post(reset_company))
        .route("/:id/name", put(rename_company))
}

pub async fn list_companies(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services.companies();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn add_company(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddCompanyRequest>,
) -> axum::response::Response {
    match services.add_company(body.id.clone(), &body.name) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": body.id })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_response(e),
    }
}

pub async fn get_chart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CompanyId>,
) -> axum::response::Response {
    match services.chart(&id) {
        Ok(accounts) => (
            StatusCode::OK,
            Json(serde_json::json!({ "items": accounts })),
        )
            .into_response(),
        Err(e) => errors::ledger_error_response(e),
    }
}

pub async fn reset_company(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CompanyId>,
) -> axum::response::Response {
    match services.reset_company(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::ledger_error_response(e),
    }
}

pub async fn rename_company(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CompanyId>,
    Json(body): Json<dto::RenameCompanyRequest>,
) -> axum::response::Response {
    match services.rename_company(&id, &body.name) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::ledger_error_response(e),
    }
}
