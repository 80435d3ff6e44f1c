//! Handlers module - Controller HTTP
//!
//! Ogni collezione viene montata con lo stesso router generico: cambia solo l'entity.

pub mod vehicle;

use crate::entities::Vehicle;
use crate::services::VehicleService;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Configura le cinque routes CRUD di una collezione di veicoli
///
/// ```text
/// POST   /        -> create
/// GET    /        -> read
/// GET    /{id}    -> read_one
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn vehicle_routes<E, S>(service: Arc<VehicleService<E>>) -> Router<S>
where
    E: Vehicle,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(vehicle::read::<E>).post(vehicle::create::<E>))
        .route(
            "/{id}",
            get(vehicle::read_one::<E>)
                .put(vehicle::update::<E>)
                .delete(vehicle::delete::<E>),
        )
        .with_state(service)
}
