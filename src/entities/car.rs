//! Car entity - Entità auto

use super::vehicle::Vehicle;
use crate::dtos::CarDTO;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(rename = "_id")]
    pub id: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub status: Option<bool>,
    pub buy_value: i64,
    pub doors_qty: i32,
    pub seats_qty: i32,
}

impl Vehicle for Car {
    type Data = CarDTO;

    const KIND: &'static str = "car";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_data(id: String, data: CarDTO) -> Self {
        Self {
            id,
            model: data.model,
            year: data.year,
            color: data.color,
            status: data.status,
            buy_value: data.buy_value,
            doors_qty: data.doors_qty,
            seats_qty: data.seats_qty,
        }
    }
}
