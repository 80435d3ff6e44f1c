#![allow(dead_code)]

use axum_test::TestServer;
use car_shop::core::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

/// Crea un AppState in memoria per i test
pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::in_memory())
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = car_shop::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Shortcut: stato nuovo + server
pub fn new_server() -> TestServer {
    create_test_server(create_test_state())
}

/// Un id valido che non esiste in nessuna collezione
pub fn missing_id() -> String {
    bson::oid::ObjectId::new().to_hex()
}

pub fn car_body() -> Value {
    json!({
        "model": "Fiat Uno",
        "year": 2000,
        "color": "Vermelho",
        "buyValue": 10000,
        "doorsQty": 4,
        "seatsQty": 5
    })
}

pub fn motorcycle_body() -> Value {
    json!({
        "model": "Honda CG Titan 125",
        "year": 1963,
        "color": "Red",
        "status": true,
        "buyValue": 3500,
        "category": "Street",
        "engineCapacity": 125
    })
}
