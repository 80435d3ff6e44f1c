//! Car shop server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config, StorageBackend};
pub use services::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione
///
/// ```text
/// /              - Health check
/// /cars          - Collezione auto (CRUD)
/// /motorcycles   - Collezione moto (CRUD)
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/cars", handlers::vehicle_routes(state.cars.clone()))
        .nest(
            "/motorcycles",
            handlers::vehicle_routes(state.motorcycles.clone()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
