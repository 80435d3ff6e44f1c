//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i documenti persistiti.
//! Ogni entity corrisponde a una collezione (tabella) nel database.

pub mod car;
pub mod enums;
pub mod motorcycle;
pub mod vehicle;

// Re-exports per facilitare l'import
pub use car::Car;
pub use enums::MotorcycleCategory;
pub use motorcycle::Motorcycle;
pub use vehicle::Vehicle;
