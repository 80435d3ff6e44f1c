//! Vehicle handlers - Controller HTTP generici per auto e moto
//!
//! Gli handler estraggono path e body, delegano al service e scelgono lo status code.

use crate::core::AppError;
use crate::core::object_id::parse_object_id;
use crate::entities::Vehicle;
use crate::services::VehicleService;
use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(service, body), fields(kind = E::KIND))]
pub async fn create<E: Vehicle>(
    State(service): State<Arc<VehicleService<E>>>,
    body: Result<Json<E::Data>, JsonRejection>,
) -> Result<(StatusCode, Json<E>), AppError> {
    debug!("Creating document");
    let Json(data) = body?;
    let created = service.create(data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(service), fields(kind = E::KIND))]
pub async fn read<E: Vehicle>(
    State(service): State<Arc<VehicleService<E>>>,
) -> Result<Json<Vec<E>>, AppError> {
    Ok(Json(service.read().await?))
}

#[instrument(skip(service), fields(kind = E::KIND, id = %id))]
pub async fn read_one<E: Vehicle>(
    State(service): State<Arc<VehicleService<E>>>,
    Path(id): Path<String>, // parametro dalla URL /cars/{id}
) -> Result<Json<E>, AppError> {
    Ok(Json(service.read_one(&id).await?))
}

#[instrument(skip(service, body), fields(kind = E::KIND, id = %id))]
pub async fn update<E: Vehicle>(
    State(service): State<Arc<VehicleService<E>>>,
    Path(id): Path<String>,
    body: Result<Json<E::Data>, JsonRejection>,
) -> Result<Json<E>, AppError> {
    debug!("Updating document");
    // id non valido -> 400 anche se il body è malformato
    parse_object_id(&id)?;
    let Json(data) = body?;
    Ok(Json(service.update(&id, data).await?))
}

#[instrument(skip(service), fields(kind = E::KIND, id = %id))]
pub async fn delete<E: Vehicle>(
    State(service): State<Arc<VehicleService<E>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
