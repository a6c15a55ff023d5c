use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{board::BoardRepository, user::UserRepository},
    error::{board::BoardError, AppError},
    model::board::{Board, CreateBoardParam, CreateBoardParams, UpdateBoardParams},
    util::parse::require_text,
};

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a board owned by an existing user.
    ///
    /// A new public id is always generated. The board starts without a position record;
    /// one is created with its first list.
    ///
    /// # Returns
    /// - `Ok(Board)` - The created board
    /// - `Err(AppError::BoardErr(OwnerNotFound))` - No user with the owner public id
    /// - `Err(AppError::ValidationErr)` - Blank title
    pub async fn create(&self, params: CreateBoardParams) -> Result<Board, AppError> {
        let title = require_text("title", params.title)?;

        let owner = UserRepository::new(self.db)
            .find_by_public_id(params.owner_public_id)
            .await?
            .ok_or(BoardError::OwnerNotFound(params.owner_public_id))?;

        let board = BoardRepository::new(self.db)
            .create(CreateBoardParam {
                public_id: Uuid::new_v4(),
                owner_id: owner.id,
                title,
                description: params.description,
            })
            .await?;

        tracing::info!("Created board {} for user {}", board.public_id, owner.public_id);

        Ok(board)
    }

    /// Gets a board by public id
    pub async fn get_by_public_id(&self, public_id: Uuid) -> Result<Option<Board>, AppError> {
        let board = BoardRepository::new(self.db)
            .find_by_public_id(public_id)
            .await?;

        Ok(board)
    }

    /// Updates a board's title and description
    pub async fn update(&self, params: UpdateBoardParams) -> Result<Board, AppError> {
        let public_id = params.public_id;
        let params = UpdateBoardParams {
            title: require_text("title", params.title)?,
            ..params
        };

        let board = BoardRepository::new(self.db)
            .update(params)
            .await?
            .ok_or(BoardError::NotFound(public_id))?;

        tracing::info!("Updated board {}", board.public_id);

        Ok(board)
    }
}
