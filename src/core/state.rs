//! Application State - Stato globale dell'applicazione
//!
//! Contiene i service di ogni collezione (con il relativo repository)
//! e le informazioni esposte dall'health check.

use super::config::StorageBackend;
use crate::entities::{Car, Motorcycle};
use crate::repositories::{
    CarRepository, InMemoryRepository, MotorcycleRepository, VehicleRepository,
};
use crate::services::VehicleService;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use std::sync::Arc;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Service per la collezione /cars
    pub cars: Arc<VehicleService<Car>>,

    /// Service per la collezione /motorcycles
    pub motorcycles: Arc<VehicleService<Motorcycle>>,

    /// Backend di persistenza in uso
    pub storage: StorageBackend,

    /// Istante di avvio del server
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Crea una nuova istanza di AppState con i repository MySQL
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni MySQL condiviso
    pub fn new(pool: MySqlPool) -> Self {
        Self::from_repositories(
            Arc::new(CarRepository::new(pool.clone())),
            Arc::new(MotorcycleRepository::new(pool)),
            StorageBackend::MySql,
        )
    }

    /// Crea un AppState con entrambe le collezioni in memoria
    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(InMemoryRepository::<Car>::new()),
            Arc::new(InMemoryRepository::<Motorcycle>::new()),
            StorageBackend::Memory,
        )
    }

    pub fn from_repositories(
        cars: Arc<dyn VehicleRepository<Car>>,
        motorcycles: Arc<dyn VehicleRepository<Motorcycle>>,
        storage: StorageBackend,
    ) -> Self {
        Self {
            cars: Arc::new(VehicleService::new(cars)),
            motorcycles: Arc::new(VehicleService::new(motorcycles)),
            storage,
            started_at: Utc::now(),
        }
    }
}
