//! Services module - Logica applicativa tra handler HTTP e repository
//!
//! Il service applica la validazione dello schema e il controllo dell'id,
//! poi chiama il repository della collezione.

pub mod vehicle;

pub use vehicle::VehicleService;

use crate::AppState;
use axum::extract::{Json, State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Risposta dell'health check
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: String,
    pub started_at: DateTime<Utc>,
}

/// Root endpoint - health check
pub async fn root(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage.to_string(),
        started_at: state.started_at,
    })
}
