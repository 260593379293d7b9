use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::services::AppServices;

/// Full registry snapshot: names, charts with balances, and logs, with
/// every money value as a decimal string. External exporters consume this
/// structure and perform no accounting logic of their own.
pub async fn snapshot(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.export_snapshot())).into_response()
}
