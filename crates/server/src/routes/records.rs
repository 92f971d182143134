//! Collection-agnostic handler bodies shared by the restaurant and expense routes.

use axum::{http::StatusCode, Json};
use common::types::MessageBody;
use service::errors::ServiceError;
use service::{Document, Record, RecordService};

use crate::errors::ApiError;
use crate::metrics;

fn failure<D: Document>(e: ServiceError) -> ApiError {
    if !e.is_client_error() && !matches!(e, ServiceError::NotFound(_)) {
        metrics::store_error(D::COLLECTION);
    }
    ApiError::from(e)
}

pub(crate) async fn list<D: Document>(svc: &RecordService<D>) -> Result<Json<Vec<Record<D>>>, ApiError> {
    svc.list().await.map(Json).map_err(failure::<D>)
}

pub(crate) async fn create<D: Document>(
    svc: &RecordService<D>,
    input: D::Input,
) -> Result<(StatusCode, Json<Record<D>>), ApiError> {
    let created = svc.create(input).await.map_err(failure::<D>)?;
    metrics::record_created(D::COLLECTION);
    Ok((StatusCode::CREATED, Json(created)))
}

pub(crate) async fn delete<D: Document>(svc: &RecordService<D>, id: &str) -> Result<Json<MessageBody>, ApiError> {
    svc.delete(id).await.map_err(failure::<D>)?;
    metrics::record_deleted(D::COLLECTION);
    Ok(Json(MessageBody::new("Deleted")))
}
