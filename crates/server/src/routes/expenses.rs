use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageBody;
use service::records::CreateExpenseInput;
use service::{Expense, Record};

use crate::errors::ApiError;
use crate::routes::records;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/expenses", tag = "expenses",
    responses(
        (status = 200, description = "All expenses", body = [crate::openapi::ExpenseDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Record<Expense>>>, ApiError> {
    records::list(&state.expenses).await
}

#[utoipa::path(
    post, path = "/api/expenses", tag = "expenses",
    request_body = crate::openapi::CreateExpenseRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ExpenseDoc),
        (status = 400, description = "Missing fields", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpenseInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Record<Expense>>), ApiError> {
    let Json(input) = payload?;
    records::create(&state.expenses, input).await
}

#[utoipa::path(
    delete, path = "/api/expenses/{id}", tag = "expenses",
    params(("id" = String, Path, description = "Expense id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Expense not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<MessageBody>, ApiError> {
    records::delete(&state.expenses, &id).await
}
