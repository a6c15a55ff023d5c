//! Board domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::board::{BoardDto, CreateBoardDto, UpdateBoardDto};

/// Project workspace holding an ordered set of lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Internal storage id.
    pub id: i32,
    /// Public id exposed through the API.
    pub public_id: Uuid,
    /// Internal id of the owning user.
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Converts an entity model to a board domain model at the repository boundary.
    pub fn from_entity(entity: entity::board::Model) -> Self {
        Self {
            id: entity.id,
            public_id: entity.public_id,
            owner_id: entity.owner_id,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    /// Converts the board domain model to a DTO for API responses.
    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            id: self.public_id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a board through the service layer.
#[derive(Debug, Clone)]
pub struct CreateBoardParams {
    /// Public id of the user who will own the board.
    pub owner_public_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl CreateBoardParams {
    pub fn from_dto(dto: CreateBoardDto) -> Self {
        Self {
            owner_public_id: dto.owner_id,
            title: dto.title,
            description: dto.description,
        }
    }
}

/// Parameters for inserting a board row.
#[derive(Debug, Clone)]
pub struct CreateBoardParam {
    pub public_id: Uuid,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
}

/// Parameters for updating a board's title and description.
#[derive(Debug, Clone)]
pub struct UpdateBoardParams {
    pub public_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl UpdateBoardParams {
    pub fn from_dto(public_id: Uuid, dto: UpdateBoardDto) -> Self {
        Self {
            public_id,
            title: dto.title,
            description: dto.description,
        }
    }
}
