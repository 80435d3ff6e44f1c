//! Motorcycle DTOs - Data Transfer Objects per moto

use crate::entities::MotorcycleCategory;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare o sostituire una moto (senza _id)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MotorcycleDTO {
    #[validate(length(min = 3, message = "Model must be at least 3 characters long"))]
    pub model: String,

    #[validate(range(min = 1900, max = 2022, message = "Year must be between 1900 and 2022"))]
    pub year: i32,

    #[validate(length(min = 3, message = "Color must be at least 3 characters long"))]
    pub color: String,

    #[serde(default)]
    pub status: Option<bool>,

    pub buy_value: i64,

    // l'enum viene controllato già da serde in fase di parsing
    pub category: MotorcycleCategory,

    #[validate(range(min = 1, max = 2500, message = "Engine capacity must be between 1 and 2500"))]
    pub engine_capacity: i32,
}
