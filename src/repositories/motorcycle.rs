//! MotorcycleRepository - Repository per la gestione delle moto (MySQL)

use super::{Create, Delete, Read, ReadAll, Update};
use crate::core::object_id::new_object_id;
use crate::dtos::MotorcycleDTO;
use crate::entities::{Motorcycle, Vehicle};
use async_trait::async_trait;
use bson::oid::ObjectId;
use sqlx::{Error, MySqlPool};
use tracing::{debug, info, instrument};

// MOTORCYCLE REPOSITORY
pub struct MotorcycleRepository {
    connection_pool: MySqlPool,
}

impl MotorcycleRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl Create<Motorcycle, MotorcycleDTO> for MotorcycleRepository {
    #[instrument(skip(self, data), fields(model = %data.model, category = ?data.category))]
    async fn create(&self, data: &MotorcycleDTO) -> Result<Motorcycle, Error> {
        debug!("Inserting new motorcycle");
        let id = new_object_id();
        sqlx::query(
            r#"
            INSERT INTO motorcycles (id, model, `year`, color, status, buy_value, category, engine_capacity)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&data.model)
        .bind(data.year)
        .bind(&data.color)
        .bind(data.status)
        .bind(data.buy_value)
        .bind(data.category)
        .bind(data.engine_capacity)
        .execute(&self.connection_pool)
        .await?;

        info!("Motorcycle created with id {}", id);
        Ok(Motorcycle::from_data(id, data.clone()))
    }
}

#[async_trait]
impl ReadAll<Motorcycle> for MotorcycleRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Motorcycle>, Error> {
        let motorcycles = sqlx::query_as::<_, Motorcycle>(
            r#"
            SELECT id, model, `year`, color, status, buy_value, category, engine_capacity
            FROM motorcycles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Read {} motorcycles", motorcycles.len());
        Ok(motorcycles)
    }
}

#[async_trait]
impl Read<Motorcycle, ObjectId> for MotorcycleRepository {
    #[instrument(skip(self), fields(motorcycle_id = %id))]
    async fn read(&self, id: &ObjectId) -> Result<Option<Motorcycle>, Error> {
        let motorcycle = sqlx::query_as::<_, Motorcycle>(
            r#"
            SELECT id, model, `year`, color, status, buy_value, category, engine_capacity
            FROM motorcycles
            WHERE id = ?
            "#,
        )
        .bind(id.to_hex())
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(motorcycle)
    }
}

#[async_trait]
impl Update<Motorcycle, MotorcycleDTO, ObjectId> for MotorcycleRepository {
    #[instrument(skip(self, data), fields(motorcycle_id = %id))]
    async fn update(&self, id: &ObjectId, data: &MotorcycleDTO) -> Result<Motorcycle, Error> {
        // sqlx apre la connessione con FOUND_ROWS: rows_affected conta le righe trovate
        let result = sqlx::query(
            r#"
            UPDATE motorcycles
            SET model = ?, `year` = ?, color = ?, status = ?, buy_value = ?, category = ?, engine_capacity = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.model)
        .bind(data.year)
        .bind(&data.color)
        .bind(data.status)
        .bind(data.buy_value)
        .bind(data.category)
        .bind(data.engine_capacity)
        .bind(id.to_hex())
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Motorcycle updated");
        Ok(Motorcycle::from_data(id.to_hex(), data.clone()))
    }
}

#[async_trait]
impl Delete<ObjectId> for MotorcycleRepository {
    #[instrument(skip(self), fields(motorcycle_id = %id))]
    async fn delete(&self, id: &ObjectId) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM motorcycles WHERE id = ?")
            .bind(id.to_hex())
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Motorcycle deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::MotorcycleCategory;
    use sqlx::MySqlPool;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("motorcycles")))]
    #[ignore = "requires a MySQL server reachable through DATABASE_URL"]
    async fn test_category_survives_the_database(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = MotorcycleRepository::new(pool);

        let all = repo.read_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category, MotorcycleCategory::Street);

        let created = repo
            .create(&MotorcycleDTO {
                model: "Harley Fat Boy".to_string(),
                year: 2020,
                color: "Black".to_string(),
                status: None,
                buy_value: 90000,
                category: MotorcycleCategory::Custom,
                engine_capacity: 1868,
            })
            .await?;
        let id = ObjectId::parse_str(&created.id).expect("generated id is valid");
        let stored = repo.read(&id).await?.expect("motorcycle was stored");
        assert_eq!(stored.category, MotorcycleCategory::Custom);
        assert_eq!(stored.status, None);
        Ok(())
    }
}
