//! Domain models for board lists.
//!
//! A list carries no ordering information of its own. Display order lives in the board's
//! position record (see `list_position`) and is applied by the list service.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::list::{CreateListDto, ListDto, ListWithOrderDto, UpdateListDto};

/// Single column of a board.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    /// Internal storage id, never exposed through the API.
    pub id: i32,
    /// Public id, assigned once at creation and never changed.
    pub public_id: Uuid,
    /// Internal id of the owning board.
    pub board_id: i32,
    /// Public id of the owning board.
    pub board_public_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl List {
    /// Converts an entity model to a list domain model at the repository boundary.
    ///
    /// The board public id is not stored on the list row, so callers pass the one they
    /// resolved through the board relation.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    /// - `board_public_id` - Public id of the board referenced by `entity.board_id`
    pub fn from_entity(entity: entity::list::Model, board_public_id: Uuid) -> Self {
        Self {
            id: entity.id,
            public_id: entity.public_id,
            board_id: entity.board_id,
            board_public_id,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the list domain model to a DTO for API responses.
    pub fn into_dto(self) -> ListDto {
        ListDto {
            id: self.public_id,
            board_id: self.board_public_id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Lists of a board in display order with the raw stored order.
#[derive(Debug, Clone, PartialEq)]
pub struct ListWithOrder {
    /// Stored order, unfiltered; may reference deleted lists.
    pub positions: Vec<Uuid>,
    /// Lists sorted by `positions`, skipping ids without a matching list.
    pub lists: Vec<List>,
}

impl ListWithOrder {
    pub fn into_dto(self) -> ListWithOrderDto {
        ListWithOrderDto {
            positions: self.positions,
            lists: self.lists.into_iter().map(List::into_dto).collect(),
        }
    }
}

/// Parameters for creating a list through the list service.
#[derive(Debug, Clone)]
pub struct CreateListParams {
    /// Public id of the board receiving the list.
    pub board_public_id: Uuid,
    /// Public id to use; a new one is generated when `None`.
    pub public_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
}

impl CreateListParams {
    pub fn from_dto(dto: CreateListDto) -> Self {
        Self {
            board_public_id: dto.board_id,
            public_id: dto.id,
            title: dto.title,
            description: dto.description,
        }
    }
}

/// Parameters for inserting a list row once its board has been resolved.
#[derive(Debug, Clone)]
pub struct CreateListParam {
    pub public_id: Uuid,
    pub board_id: i32,
    pub board_public_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

/// Parameters for updating a list.
///
/// Only title and description are mutable; board and identity fields are fixed at creation.
#[derive(Debug, Clone)]
pub struct UpdateListParams {
    pub public_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl UpdateListParams {
    pub fn from_dto(public_id: Uuid, dto: UpdateListDto) -> Self {
        Self {
            public_id,
            title: dto.title,
            description: dto.description,
        }
    }
}
