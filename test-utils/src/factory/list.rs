//! List factory for creating test list entities.
//!
//! Lists created here are inserted directly and do NOT appear in the board's position
//! record. Pair with `list_position` to build a consistent (or deliberately stale) order.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test lists with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::list::ListFactory;
///
/// let list = ListFactory::new(&db, board.id)
///     .title("Done")
///     .build()
///     .await?;
/// ```
pub struct ListFactory<'a> {
    db: &'a DatabaseConnection,
    board_id: i32,
    public_id: Uuid,
    title: String,
    description: Option<String>,
}

impl<'a> ListFactory<'a> {
    /// Creates a new ListFactory with default values.
    ///
    /// Defaults:
    /// - public_id: random v4 UUID
    /// - title: `"List {id}"` where id is auto-incremented
    /// - description: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `board_id` - Internal ID of the owning board
    pub fn new(db: &'a DatabaseConnection, board_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            board_id,
            public_id: Uuid::new_v4(),
            title: format!("List {}", id),
            description: None,
        }
    }

    /// Sets the public id for the list.
    pub fn public_id(mut self, public_id: Uuid) -> Self {
        self.public_id = public_id;
        self
    }

    /// Sets the list title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the list description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the list entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::list::Model)` - Created list entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::list::Model, DbErr> {
        let now = Utc::now();

        entity::list::ActiveModel {
            id: ActiveValue::NotSet,
            public_id: ActiveValue::Set(self.public_id),
            board_id: ActiveValue::Set(self.board_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a list with default values on the given board.
///
/// Shorthand for `ListFactory::new(db, board_id).build().await`.
pub async fn create_list(
    db: &DatabaseConnection,
    board_id: i32,
) -> Result<entity::list::Model, DbErr> {
    ListFactory::new(db, board_id).build().await
}
