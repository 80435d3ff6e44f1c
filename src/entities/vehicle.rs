//! Vehicle trait - Contratto comune a tutte le entità veicolo
//!
//! Cars and motorcycles share the same five CRUD operations. This trait is the
//! seam that lets the service, the handlers and the in-memory store stay
//! generic over the concrete entity.

use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

pub trait Vehicle: Serialize + Clone + Send + Sync + 'static {
    /// Request body accepted on create and update (every field except the id)
    type Data: Validate + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Singular name used in logs, e.g. `car`
    const KIND: &'static str;

    /// Hex representation of the document id
    fn id(&self) -> &str;

    /// Builds the stored entity from its id and the validated request data
    fn from_data(id: String, data: Self::Data) -> Self;
}
