//! Board data repository for database operations.
//!
//! Boards are the external read-only dependency of the list ordering: the list service
//! only resolves a board's public id to its internal id through this repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::board::{Board, CreateBoardParam, UpdateBoardParams};

/// Repository providing database operations for boards.
pub struct BoardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoardRepository<'a, C> {
    /// Creates a new BoardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new board.
    ///
    /// # Returns
    /// - `Ok(Board)` - The created board
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown owner
    pub async fn create(&self, param: CreateBoardParam) -> Result<Board, DbErr> {
        let entity = entity::board::ActiveModel {
            public_id: ActiveValue::Set(param.public_id),
            owner_id: ActiveValue::Set(param.owner_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Board::from_entity(entity))
    }

    /// Finds a board by internal id.
    #[cfg(test)]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Board>, DbErr> {
        let entity = entity::prelude::Board::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Board::from_entity))
    }

    /// Finds a board by public id.
    ///
    /// # Returns
    /// - `Ok(Some(Board))` - Board found
    /// - `Ok(None)` - No board with that public id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_public_id(&self, public_id: Uuid) -> Result<Option<Board>, DbErr> {
        let entity = entity::prelude::Board::find()
            .filter(entity::board::Column::PublicId.eq(public_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Board::from_entity))
    }

    /// Updates a board's title and description.
    ///
    /// # Returns
    /// - `Ok(Some(Board))` - The updated board
    /// - `Ok(None)` - No board with that public id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateBoardParams) -> Result<Option<Board>, DbErr> {
        let Some(board) = entity::prelude::Board::find()
            .filter(entity::board::Column::PublicId.eq(params.public_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::board::ActiveModel = board.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Board::from_entity(entity)))
    }
}
