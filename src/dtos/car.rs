//! Car DTOs - Data Transfer Objects per auto

use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare o sostituire un'auto (senza _id)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarDTO {
    #[validate(length(min = 3, message = "Model must be at least 3 characters long"))]
    pub model: String,

    #[validate(range(min = 1900, max = 2022, message = "Year must be between 1900 and 2022"))]
    pub year: i32,

    #[validate(length(min = 3, message = "Color must be at least 3 characters long"))]
    pub color: String,

    #[serde(default)]
    pub status: Option<bool>,

    pub buy_value: i64,

    #[validate(range(min = 2, max = 4, message = "Doors quantity must be between 2 and 4"))]
    pub doors_qty: i32,

    #[validate(range(min = 2, max = 7, message = "Seats quantity must be between 2 and 7"))]
    pub seats_qty: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fiat_uno() -> CarDTO {
        CarDTO {
            model: "Fiat Uno".to_string(),
            year: 2000,
            color: "Vermelho".to_string(),
            status: None,
            buy_value: 10000,
            doors_qty: 4,
            seats_qty: 5,
        }
    }

    #[test]
    fn test_valid_car_passes_validation() {
        assert!(fiat_uno().validate().is_ok());
    }

    #[test]
    fn test_every_broken_field_is_reported() {
        let car = CarDTO {
            model: String::new(),
            year: 0,
            color: String::new(),
            status: None,
            buy_value: 0,
            doors_qty: 0,
            seats_qty: 0,
        };

        let errors = car.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 5);
        let report = errors.to_string();
        for message in [
            "Model must be at least 3 characters long",
            "Year must be between 1900 and 2022",
            "Color must be at least 3 characters long",
            "Doors quantity must be between 2 and 4",
            "Seats quantity must be between 2 and 7",
        ] {
            assert!(report.contains(message), "missing error: {message}");
        }
    }

    #[test]
    fn test_quantity_bounds_are_inclusive() {
        let mut car = fiat_uno();
        car.doors_qty = 2;
        car.seats_qty = 7;
        assert!(car.validate().is_ok());

        car.doors_qty = 5;
        let errors = car.validate().unwrap_err();
        assert!(errors.to_string().contains("Doors quantity must be between 2 and 4"));
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let mut car = fiat_uno();
        for year in [1900, 2022] {
            car.year = year;
            assert!(car.validate().is_ok(), "year {year} should be accepted");
        }

        for year in [1899, 2023] {
            car.year = year;
            let errors = car.validate().unwrap_err();
            assert!(errors.to_string().contains("Year must be between 1900 and 2022"));
        }
    }

    #[test]
    fn test_model_and_color_need_three_characters() {
        let mut car = fiat_uno();
        car.model = "Uno".to_string();
        car.color = "Red".to_string();
        assert!(car.validate().is_ok());

        car.model = "Un".to_string();
        let errors = car.validate().unwrap_err();
        assert!(errors.to_string().contains("Model must be at least 3 characters long"));

        car.model = "Uno".to_string();
        car.color = "Re".to_string();
        let errors = car.validate().unwrap_err();
        assert!(errors.to_string().contains("Color must be at least 3 characters long"));
    }

    #[test]
    fn test_deserializes_camel_case_and_ignores_id() {
        let body = json!({
            "_id": "62549568b2c189bba257c7dd",
            "model": "Ferrari",
            "year": 2022,
            "color": "Red",
            "status": true,
            "buyValue": 1000000,
            "doorsQty": 2,
            "seatsQty": 2
        });

        let car: CarDTO = serde_json::from_value(body).unwrap();
        assert_eq!(car.model, "Ferrari");
        assert_eq!(car.status, Some(true));
        assert_eq!(car.buy_value, 1_000_000);
    }

    #[test]
    fn test_fractional_buy_value_is_rejected() {
        let body = json!({
            "model": "Ferrari",
            "year": 2022,
            "color": "Red",
            "buyValue": 10.5,
            "doorsQty": 2,
            "seatsQty": 2
        });

        assert!(serde_json::from_value::<CarDTO>(body).is_err());
    }
}
