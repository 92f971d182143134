use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageBody;
use service::records::CreateRestaurantInput;
use service::{Record, Restaurant};

use crate::errors::ApiError;
use crate::routes::records;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/restaurants", tag = "restaurants",
    responses(
        (status = 200, description = "All restaurants", body = [crate::openapi::RestaurantDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Record<Restaurant>>>, ApiError> {
    records::list(&state.restaurants).await
}

#[utoipa::path(
    post, path = "/api/restaurants", tag = "restaurants",
    request_body = crate::openapi::CreateRestaurantRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RestaurantDoc),
        (status = 400, description = "Missing fields", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Record<Restaurant>>), ApiError> {
    let Json(input) = payload?;
    records::create(&state.restaurants, input).await
}

#[utoipa::path(
    delete, path = "/api/restaurants/{id}", tag = "restaurants",
    params(("id" = String, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Restaurant not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<MessageBody>, ApiError> {
    records::delete(&state.restaurants, &id).await
}
