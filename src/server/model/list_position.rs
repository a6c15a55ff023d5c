//! Domain models for board list ordering.
//!
//! The order is persisted as a JSON array of list public ids in a single text column.
//! Encoding and decoding happen here, at the repository boundary.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use uuid::Uuid;

/// Ordered sequence of list public ids for exactly one board.
///
/// The sequence may contain ids of deleted lists or the same id twice; readers reconcile
/// it against the actual lists instead of trusting it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPosition {
    /// Internal storage id.
    pub id: i32,
    /// Public id of the position record.
    pub public_id: Uuid,
    /// Internal id of the board; unique across position records.
    pub board_id: i32,
    /// List public ids in display order.
    pub list_order: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListPosition {
    /// Converts an entity model to a position domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ListPosition)` - Decoded position record
    /// - `Err(DbErr::Custom)` - The stored order is not a JSON array of UUIDs
    pub fn from_entity(entity: entity::list_position::Model) -> Result<Self, DbErr> {
        let list_order = decode_order(&entity.list_order)?;

        Ok(Self {
            id: entity.id,
            public_id: entity.public_id,
            board_id: entity.board_id,
            list_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for inserting a position record.
#[derive(Debug, Clone)]
pub struct CreateListPositionParam {
    pub public_id: Uuid,
    pub board_id: i32,
    pub list_order: Vec<Uuid>,
}

/// Serializes an order into its stored column representation.
pub fn encode_order(order: &[Uuid]) -> Result<String, DbErr> {
    serde_json::to_string(order)
        .map_err(|e| DbErr::Custom(format!("Failed to encode list order: {}", e)))
}

/// Parses the stored column representation of an order.
pub fn decode_order(value: &str) -> Result<Vec<Uuid>, DbErr> {
    serde_json::from_str(value)
        .map_err(|e| DbErr::Custom(format!("Failed to decode list order '{}': {}", value, e)))
}
