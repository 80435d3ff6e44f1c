//! InMemoryRepository - Store in memoria basato su DashMap
//!
//! Used by `STORAGE_BACKEND=memory` and by the HTTP integration tests. One
//! instance holds one collection; documents are keyed by their hex id.

use super::{Create, Delete, Read, ReadAll, Update};
use crate::core::object_id::new_object_id;
use crate::entities::Vehicle;
use async_trait::async_trait;
use bson::oid::ObjectId;
use dashmap::DashMap;
use sqlx::Error;
use tracing::{debug, instrument};

pub struct InMemoryRepository<E: Vehicle> {
    documents: DashMap<String, E>,
}

impl<E: Vehicle> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<E: Vehicle> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Vehicle> Create<E, E::Data> for InMemoryRepository<E> {
    #[instrument(skip(self, data), fields(kind = E::KIND))]
    async fn create(&self, data: &E::Data) -> Result<E, Error> {
        let entity = E::from_data(new_object_id(), data.clone());
        self.documents
            .insert(entity.id().to_string(), entity.clone());
        debug!("Stored document {}", entity.id());
        Ok(entity)
    }
}

#[async_trait]
impl<E: Vehicle> ReadAll<E> for InMemoryRepository<E> {
    async fn read_all(&self) -> Result<Vec<E>, Error> {
        let mut all: Vec<E> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        // gli ObjectId sono ordinati nel tempo: ordine ~ inserimento
        all.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(all)
    }
}

#[async_trait]
impl<E: Vehicle> Read<E, ObjectId> for InMemoryRepository<E> {
    async fn read(&self, id: &ObjectId) -> Result<Option<E>, Error> {
        Ok(self
            .documents
            .get(&id.to_hex())
            .map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl<E: Vehicle> Update<E, E::Data, ObjectId> for InMemoryRepository<E> {
    #[instrument(skip(self, data), fields(kind = E::KIND, id = %id))]
    async fn update(&self, id: &ObjectId, data: &E::Data) -> Result<E, Error> {
        let key = id.to_hex();
        match self.documents.get_mut(&key) {
            Some(mut entry) => {
                *entry = E::from_data(key, data.clone());
                Ok(entry.value().clone())
            }
            None => Err(Error::RowNotFound),
        }
    }
}

#[async_trait]
impl<E: Vehicle> Delete<ObjectId> for InMemoryRepository<E> {
    #[instrument(skip(self), fields(kind = E::KIND, id = %id))]
    async fn delete(&self, id: &ObjectId) -> Result<(), Error> {
        self.documents
            .remove(&id.to_hex())
            .map(|_| ())
            .ok_or(Error::RowNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::CarDTO;
    use crate::entities::Car;

    fn car(model: &str) -> CarDTO {
        CarDTO {
            model: model.to_string(),
            year: 2019,
            color: "Blue".to_string(),
            status: Some(true),
            buy_value: 10000,
            doors_qty: 4,
            seats_qty: 5,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let repo = InMemoryRepository::<Car>::new();
        let a = repo.create(&car("Fiat Uno")).await.unwrap();
        let b = repo.create(&car("Ferrari")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 24);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_read_all_follows_insertion_order() {
        let repo = InMemoryRepository::<Car>::new();
        for model in ["Fiat Uno", "Ferrari", "Gol G5"] {
            repo.create(&car(model)).await.unwrap();
        }

        let models: Vec<String> = repo
            .read_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.model)
            .collect();
        assert_eq!(models, ["Fiat Uno", "Ferrari", "Gol G5"]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let repo = InMemoryRepository::<Car>::new();
        let created = repo.create(&car("Fiat Uno")).await.unwrap();
        let id = ObjectId::parse_str(&created.id).unwrap();

        let mut replacement = car("Fiat Uno Mille");
        replacement.status = None;
        let updated = repo.update(&id, &replacement).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.model, "Fiat Uno Mille");
        assert_eq!(updated.status, None);
        assert_eq!(repo.read(&id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_missing_documents_are_row_not_found() {
        let repo = InMemoryRepository::<Car>::new();
        let id = ObjectId::new();

        assert!(repo.read(&id).await.unwrap().is_none());
        assert!(matches!(
            repo.update(&id, &car("Fiat Uno")).await,
            Err(Error::RowNotFound)
        ));
        assert!(matches!(repo.delete(&id).await, Err(Error::RowNotFound)));
    }

    #[tokio::test]
    async fn test_delete_removes_document() {
        let repo = InMemoryRepository::<Car>::new();
        let created = repo.create(&car("Fiat Uno")).await.unwrap();
        let id = ObjectId::parse_str(&created.id).unwrap();

        repo.delete(&id).await.unwrap();
        assert!(repo.is_empty());
    }
}
