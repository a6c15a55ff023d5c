//! Board factory for creating test board entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test boards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::board::BoardFactory;
///
/// let board = BoardFactory::new(&db, user.id)
///     .title("Roadmap")
///     .build()
///     .await?;
/// ```
pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    public_id: Uuid,
    title: String,
    description: Option<String>,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory with default values.
    ///
    /// Defaults:
    /// - public_id: random v4 UUID
    /// - title: `"Board {id}"` where id is auto-incremented
    /// - description: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - Internal ID of the owning user
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            public_id: Uuid::new_v4(),
            title: format!("Board {}", id),
            description: None,
        }
    }

    /// Sets the public id for the board.
    pub fn public_id(mut self, public_id: Uuid) -> Self {
        self.public_id = public_id;
        self
    }

    /// Sets the board title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the board description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the board entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::board::Model)` - Created board entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        entity::board::ActiveModel {
            id: ActiveValue::NotSet,
            public_id: ActiveValue::Set(self.public_id),
            owner_id: ActiveValue::Set(self.owner_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a board with default values for the given owner.
///
/// Shorthand for `BoardFactory::new(db, owner_id).build().await`.
pub async fn create_board(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db, owner_id).build().await
}
