use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use finbooks_ledger::LedgerError;

/// Map an engine failure to a consistent JSON error response.
pub fn ledger_error_response(err: LedgerError) -> axum::response::Response {
    match &err {
        LedgerError::UnknownCompany(_) => {
            json_error(StatusCode::NOT_FOUND, "unknown_company", err.to_string())
        }
        LedgerError::DuplicateCompany(_) => {
            json_error(StatusCode::CONFLICT, "duplicate_company", err.to_string())
        }
        LedgerError::UnknownAccount { .. } => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "unknown_account",
            err.to_string(),
        ),
        LedgerError::UnbalancedTransaction { debits, credits } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "error": "unbalanced_transaction",
                "message": err.to_string(),
                "debits": debits,
                "credits": credits,
                "imbalance": err.imbalance(),
            })),
        )
            .into_response(),
        LedgerError::InvalidEntry { .. } => {
            json_error(StatusCode::BAD_REQUEST, "invalid_entry", err.to_string())
        }
        LedgerError::EmptyTransaction => json_error(
            StatusCode::BAD_REQUEST,
            "empty_transaction",
            err.to_string(),
        ),
        LedgerError::EmptyDescription => json_error(
            StatusCode::BAD_REQUEST,
            "empty_description",
            err.to_string(),
        ),
        LedgerError::EmptyCompanyName => json_error(
            StatusCode::BAD_REQUEST,
            "empty_company_name",
            err.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
