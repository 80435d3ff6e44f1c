//! Common repository traits
//!
//! This module defines generic interfaces for document operations. The traits are
//! object safe (through `async_trait`) so the application state can hold any backend
//! behind an `Arc<dyn VehicleRepository<_>>`.

use crate::entities::Vehicle;
use async_trait::async_trait;
use bson::oid::ObjectId;

/// Trait for creating new entities in the store
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned on insert)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
#[async_trait]
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the store
    ///
    /// # Arguments
    /// * `data` - DTO containing the data for creation (without ID)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with its new ID
    /// * `Err(sqlx::Error)` - Error during insertion
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key
#[async_trait]
pub trait Read<Entity, Id> {
    /// Reads an entity by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for reading a whole collection
#[async_trait]
pub trait ReadAll<Entity> {
    /// Reads every entity of the collection, ordered by ID
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - All entities (can be empty)
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read_all(&self) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - DTO for updating (every field is replaced)
/// * `Id` - Type of the primary key
#[async_trait]
pub trait Update<Entity, UpdateDTO, Id> {
    /// Replaces an existing entity, keeping its ID
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(sqlx::Error::RowNotFound)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during update
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
#[async_trait]
pub trait Delete<Id> {
    /// Deletes an entity from the store
    ///
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(sqlx::Error::RowNotFound)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during deletion
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}

/// Full CRUD contract for a vehicle collection
pub trait VehicleRepository<E: Vehicle>:
    Create<E, E::Data>
    + ReadAll<E>
    + Read<E, ObjectId>
    + Update<E, E::Data, ObjectId>
    + Delete<ObjectId>
    + Send
    + Sync
{
}

impl<E, T> VehicleRepository<E> for T
where
    E: Vehicle,
    T: Create<E, E::Data>
        + ReadAll<E>
        + Read<E, ObjectId>
        + Update<E, E::Data, ObjectId>
        + Delete<ObjectId>
        + Send
        + Sync,
{
}
