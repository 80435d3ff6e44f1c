//! Motorcycle entity - Entità moto

use super::enums::MotorcycleCategory;
use super::vehicle::Vehicle;
use crate::dtos::MotorcycleDTO;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Motorcycle {
    #[serde(rename = "_id")]
    pub id: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub status: Option<bool>,
    pub buy_value: i64,
    pub category: MotorcycleCategory,
    pub engine_capacity: i32,
}

impl Vehicle for Motorcycle {
    type Data = MotorcycleDTO;

    const KIND: &'static str = "motorcycle";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_data(id: String, data: MotorcycleDTO) -> Self {
        Self {
            id,
            model: data.model,
            year: data.year,
            color: data.color,
            status: data.status,
            buy_value: data.buy_value,
            category: data.category,
            engine_capacity: data.engine_capacity,
        }
    }
}
