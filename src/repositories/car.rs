//! CarRepository - Repository per la gestione delle auto (MySQL)

use super::{Create, Delete, Read, ReadAll, Update};
use crate::core::object_id::new_object_id;
use crate::dtos::CarDTO;
use crate::entities::{Car, Vehicle};
use async_trait::async_trait;
use bson::oid::ObjectId;
use sqlx::{Error, MySqlPool};
use tracing::{debug, info, instrument};

// CAR REPOSITORY
pub struct CarRepository {
    connection_pool: MySqlPool,
}

impl CarRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl Create<Car, CarDTO> for CarRepository {
    #[instrument(skip(self, data), fields(model = %data.model))]
    async fn create(&self, data: &CarDTO) -> Result<Car, Error> {
        debug!("Inserting new car");
        let id = new_object_id();
        sqlx::query(
            r#"
            INSERT INTO cars (id, model, `year`, color, status, buy_value, doors_qty, seats_qty)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&data.model)
        .bind(data.year)
        .bind(&data.color)
        .bind(data.status)
        .bind(data.buy_value)
        .bind(data.doors_qty)
        .bind(data.seats_qty)
        .execute(&self.connection_pool)
        .await?;

        info!("Car created with id {}", id);
        Ok(Car::from_data(id, data.clone()))
    }
}

#[async_trait]
impl ReadAll<Car> for CarRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Car>, Error> {
        let cars = sqlx::query_as::<_, Car>(
            r#"
            SELECT id, model, `year`, color, status, buy_value, doors_qty, seats_qty
            FROM cars
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Read {} cars", cars.len());
        Ok(cars)
    }
}

#[async_trait]
impl Read<Car, ObjectId> for CarRepository {
    #[instrument(skip(self), fields(car_id = %id))]
    async fn read(&self, id: &ObjectId) -> Result<Option<Car>, Error> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            SELECT id, model, `year`, color, status, buy_value, doors_qty, seats_qty
            FROM cars
            WHERE id = ?
            "#,
        )
        .bind(id.to_hex())
        .fetch_optional(&self.connection_pool)
        .await?;

        if car.is_some() {
            debug!("Car found");
        } else {
            debug!("Car not found");
        }

        Ok(car)
    }
}

#[async_trait]
impl Update<Car, CarDTO, ObjectId> for CarRepository {
    #[instrument(skip(self, data), fields(car_id = %id))]
    async fn update(&self, id: &ObjectId, data: &CarDTO) -> Result<Car, Error> {
        // sqlx apre la connessione con FOUND_ROWS: rows_affected conta le righe trovate
        let result = sqlx::query(
            r#"
            UPDATE cars
            SET model = ?, `year` = ?, color = ?, status = ?, buy_value = ?, doors_qty = ?, seats_qty = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.model)
        .bind(data.year)
        .bind(&data.color)
        .bind(data.status)
        .bind(data.buy_value)
        .bind(data.doors_qty)
        .bind(data.seats_qty)
        .bind(id.to_hex())
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Car updated");
        Ok(Car::from_data(id.to_hex(), data.clone()))
    }
}

#[async_trait]
impl Delete<ObjectId> for CarRepository {
    #[instrument(skip(self), fields(car_id = %id))]
    async fn delete(&self, id: &ObjectId) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id.to_hex())
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!("Car not found, nothing deleted");
            return Err(Error::RowNotFound);
        }

        info!("Car deleted");
        Ok(())
    }
}
