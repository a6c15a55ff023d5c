//! List position factory for creating board ordering records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test position records with customizable fields.
///
/// The order is stored exactly as given; nothing checks that the ids belong to lists on
/// the board, which lets tests build stale or duplicated sequences on purpose.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::list_position::ListPositionFactory;
///
/// let position = ListPositionFactory::new(&db, board.id)
///     .list_order(vec![first.public_id, second.public_id])
///     .build()
///     .await?;
/// ```
pub struct ListPositionFactory<'a> {
    db: &'a DatabaseConnection,
    board_id: i32,
    public_id: Uuid,
    list_order: Vec<Uuid>,
}

impl<'a> ListPositionFactory<'a> {
    /// Creates a new ListPositionFactory with an empty order.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `board_id` - Internal ID of the board the order belongs to
    pub fn new(db: &'a DatabaseConnection, board_id: i32) -> Self {
        Self {
            db,
            board_id,
            public_id: Uuid::new_v4(),
            list_order: Vec::new(),
        }
    }

    /// Sets the ordered list public ids.
    pub fn list_order(mut self, list_order: Vec<Uuid>) -> Self {
        self.list_order = list_order;
        self
    }

    /// Builds and inserts the position entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::list_position::Model)` - Created position entity
    /// - `Err(DbErr)` - Serialization or database error during insert
    pub async fn build(self) -> Result<entity::list_position::Model, DbErr> {
        let list_order =
            serde_json::to_string(&self.list_order).map_err(|e| DbErr::Custom(e.to_string()))?;
        let now = Utc::now();

        entity::list_position::ActiveModel {
            id: ActiveValue::NotSet,
            public_id: ActiveValue::Set(self.public_id),
            board_id: ActiveValue::Set(self.board_id),
            list_order: ActiveValue::Set(list_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a position record for a board with the given order.
///
/// Shorthand for `ListPositionFactory::new(db, board_id).list_order(order).build().await`.
pub async fn create_list_position(
    db: &DatabaseConnection,
    board_id: i32,
    list_order: Vec<Uuid>,
) -> Result<entity::list_position::Model, DbErr> {
    ListPositionFactory::new(db, board_id)
        .list_order(list_order)
        .build()
        .await
}
