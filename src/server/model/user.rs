//! User domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// Application user owning boards.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Internal storage id.
    pub id: i32,
    /// Public id exposed through the API.
    pub public_id: Uuid,
    /// Display name of the user.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            public_id: entity.public_id,
            name: entity.name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.public_id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a user through the service layer.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
        }
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub public_id: Uuid,
    pub name: String,
    pub email: String,
}

/// Parameters for updating a user's name and email.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub public_id: Uuid,
    pub name: String,
    pub email: String,
}

impl UpdateUserParams {
    pub fn from_dto(public_id: Uuid, dto: UpdateUserDto) -> Self {
        Self {
            public_id,
            name: dto.name,
            email: dto.email,
        }
    }
}
