//! List position data repository for database operations.
//!
//! Each board owns at most one position record holding the display order of its lists.
//! The repository reads and writes that record verbatim: it does not check the stored ids
//! against the board's lists.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::server::model::list_position::{encode_order, CreateListPositionParam, ListPosition};

/// Repository providing database operations for board list ordering.
pub struct ListPositionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListPositionRepository<'a, C> {
    /// Creates a new ListPositionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the stored list order for a board.
    ///
    /// # Arguments
    /// - `board_public_id` - Public id of the board
    ///
    /// # Returns
    /// - `Ok(Some(Vec<Uuid>))` - The stored order, possibly empty or stale
    /// - `Ok(None)` - The board has no position record
    /// - `Err(DbErr)` - Database error or undecodable stored order
    pub async fn get_order(&self, board_public_id: Uuid) -> Result<Option<Vec<Uuid>>, DbErr> {
        let position = self.get_by_board(board_public_id).await?;

        Ok(position.map(|p| p.list_order))
    }

    /// Gets the position record of a board by the board's public id.
    pub async fn get_by_board(&self, board_public_id: Uuid) -> Result<Option<ListPosition>, DbErr> {
        let entity = entity::prelude::ListPosition::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::list_position::Relation::Board.def(),
            )
            .filter(entity::board::Column::PublicId.eq(board_public_id))
            .one(self.db)
            .await?;

        entity.map(ListPosition::from_entity).transpose()
    }

    /// Gets the position record of a board by the board's internal id.
    #[cfg(test)]
    pub async fn get_by_board_id(&self, board_id: i32) -> Result<Option<ListPosition>, DbErr> {
        let entity = entity::prelude::ListPosition::find()
            .filter(entity::list_position::Column::BoardId.eq(board_id))
            .one(self.db)
            .await?;

        entity.map(ListPosition::from_entity).transpose()
    }

    /// Gets the position record of a board and locks its row until the transaction ends.
    ///
    /// Emits `SELECT ... FOR UPDATE` on backends with row locks. SQLite ignores the lock
    /// clause, its writers are already serialized by the database lock.
    ///
    /// # Arguments
    /// - `board_id` - Internal id of the board
    ///
    /// # Returns
    /// - `Ok(Some(ListPosition))` - Locked position record
    /// - `Ok(None)` - The board has no position record
    /// - `Err(DbErr)` - Database error or undecodable stored order
    pub async fn get_by_board_id_for_update(
        &self,
        board_id: i32,
    ) -> Result<Option<ListPosition>, DbErr> {
        let entity = entity::prelude::ListPosition::find()
            .filter(entity::list_position::Column::BoardId.eq(board_id))
            .lock_exclusive()
            .one(self.db)
            .await?;

        entity.map(ListPosition::from_entity).transpose()
    }

    /// Inserts a new position record.
    ///
    /// # Returns
    /// - `Ok(ListPosition)` - The created record
    /// - `Err(DbErr)` - Database error, including a unique violation when the board
    ///   already has a record
    #[cfg(test)]
    pub async fn create(&self, param: CreateListPositionParam) -> Result<ListPosition, DbErr> {
        let entity = Self::active_model(param)?.insert(self.db).await?;

        ListPosition::from_entity(entity)
    }

    /// Inserts a new position record unless the board already has one.
    ///
    /// Uses `ON CONFLICT (board_id) DO NOTHING`, so a concurrent first insert for the same
    /// board never fails the surrounding transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The record was inserted
    /// - `Ok(false)` - The board already had a record; nothing was written
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_if_absent(&self, param: CreateListPositionParam) -> Result<bool, DbErr> {
        let rows = entity::prelude::ListPosition::insert(Self::active_model(param)?)
            .on_conflict(
                OnConflict::column(entity::list_position::Column::BoardId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(rows > 0)
    }

    /// Overwrites the stored order of an existing position record.
    ///
    /// Writes `position.list_order` as-is; callers decide whether to append, replace or
    /// prune before calling.
    ///
    /// # Returns
    /// - `Ok(ListPosition)` - The record as stored after the update
    /// - `Err(DbErr)` - Database error, or `RecordNotUpdated` if the record no longer exists
    pub async fn update_order(&self, position: &ListPosition) -> Result<ListPosition, DbErr> {
        let active_model = entity::list_position::ActiveModel {
            id: ActiveValue::Unchanged(position.id),
            list_order: ActiveValue::Set(encode_order(&position.list_order)?),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        let entity = active_model.update(self.db).await?;

        ListPosition::from_entity(entity)
    }

    fn active_model(
        param: CreateListPositionParam,
    ) -> Result<entity::list_position::ActiveModel, DbErr> {
        let now = Utc::now();

        Ok(entity::list_position::ActiveModel {
            public_id: ActiveValue::Set(param.public_id),
            board_id: ActiveValue::Set(param.board_id),
            list_order: ActiveValue::Set(encode_order(&param.list_order)?),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
    }
}
