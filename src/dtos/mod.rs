//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities)
//! e portano con sé le regole di validazione.

pub mod car;
pub mod motorcycle;

pub use car::CarDTO;
pub use motorcycle::MotorcycleDTO;
