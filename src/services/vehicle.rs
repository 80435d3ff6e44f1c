//! Vehicle service - Validazione e dispatch verso i repository
//!
//! The same service serves cars and motorcycles. Every operation that takes an
//! id checks it here, before any repository call.

use crate::core::AppError;
use crate::core::object_id::parse_object_id;
use crate::entities::Vehicle;
use crate::repositories::{Create, Delete, Read, ReadAll, Update, VehicleRepository};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

pub struct VehicleService<E: Vehicle> {
    repository: Arc<dyn VehicleRepository<E>>,
}

impl<E: Vehicle> VehicleService<E> {
    pub fn new(repository: Arc<dyn VehicleRepository<E>>) -> Self {
        Self { repository }
    }

    /// Valida il body e crea un nuovo documento
    #[instrument(skip(self, data), fields(kind = E::KIND))]
    pub async fn create(&self, data: E::Data) -> Result<E, AppError> {
        data.validate().map_err(|e| {
            warn!("Validation failed: {}", e);
            AppError::from(e)
        })?;

        let created = self.repository.create(&data).await?;
        info!("Created {} {}", E::KIND, created.id());
        Ok(created)
    }

    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn read(&self) -> Result<Vec<E>, AppError> {
        let all = self.repository.read_all().await?;
        debug!("Found {} documents", all.len());
        Ok(all)
    }

    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn read_one(&self, id: &str) -> Result<E, AppError> {
        let object_id = parse_object_id(id)?;
        self.repository.read(&object_id).await?.ok_or_else(|| {
            warn!("Document not found");
            AppError::object_not_found()
        })
    }

    /// Sostituisce tutti i campi del documento (semantica PUT)
    #[instrument(skip(self, data), fields(kind = E::KIND))]
    pub async fn update(&self, id: &str, data: E::Data) -> Result<E, AppError> {
        // 1. id, 2. body, 3. esistenza
        let object_id = parse_object_id(id)?;
        data.validate().map_err(|e| {
            warn!("Validation failed: {}", e);
            AppError::from(e)
        })?;

        let updated = self.repository.update(&object_id, &data).await?;
        info!("Updated {} {}", E::KIND, updated.id());
        Ok(updated)
    }

    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;
        self.repository.delete(&object_id).await?;
        info!("Deleted {} {}", E::KIND, id);
        Ok(())
    }
}
