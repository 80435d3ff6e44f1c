//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Logging
//! - Gestione errori
//! - Identificativi dei documenti
//! - Stato applicazione

pub mod config;
pub mod error;
pub mod logging;
pub mod object_id;
pub mod state;

// Re-exports per facilitare l'import
pub use config::{Config, StorageBackend};
pub use error::AppError;
pub use state::AppState;
