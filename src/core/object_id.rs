//! Identificativi dei documenti
//!
//! Ids are document-store object ids: 12 bytes rendered as 24 lowercase hex
//! characters. Parsing is strict, so a 24-character string with a non-hex
//! character is rejected as well.

use super::AppError;
use bson::oid::ObjectId;

/// Parses a path segment into an [`ObjectId`]
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::invalid_id())
}

/// Generates a fresh, time-ordered id in its hex form
pub fn new_object_id() -> String {
    ObjectId::new().to_hex()
}
