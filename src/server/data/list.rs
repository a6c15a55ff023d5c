//! List data repository for database operations.
//!
//! Stores and fetches list rows only. It never reads or writes the board's position
//! record; ordering is applied by the list service.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::server::model::list::{CreateListParam, List, UpdateListParams};

/// Repository providing database operations for lists.
pub struct ListRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListRepository<'a, C> {
    /// Creates a new ListRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new list.
    ///
    /// # Arguments
    /// - `param` - List fields with the board already resolved
    ///
    /// # Returns
    /// - `Ok(List)` - The created list
    /// - `Err(DbErr)` - Database error, e.g. a duplicate public id or unknown board
    pub async fn create(&self, param: CreateListParam) -> Result<List, DbErr> {
        let now = Utc::now();

        let entity = entity::list::ActiveModel {
            public_id: ActiveValue::Set(param.public_id),
            board_id: ActiveValue::Set(param.board_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(List::from_entity(entity, param.board_public_id))
    }

    /// Finds a list by internal id.
    ///
    /// # Returns
    /// - `Ok(Some(List))` - List found, with its board's public id
    /// - `Ok(None)` - No list with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<List>, DbErr> {
        let result = entity::prelude::List::find_by_id(id)
            .find_also_related(entity::prelude::Board)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(list, board)| board.map(|b| List::from_entity(list, b.public_id))))
    }

    /// Finds a list by public id.
    pub async fn find_by_public_id(&self, public_id: Uuid) -> Result<Option<List>, DbErr> {
        let result = entity::prelude::List::find()
            .filter(entity::list::Column::PublicId.eq(public_id))
            .find_also_related(entity::prelude::Board)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(list, board)| board.map(|b| List::from_entity(list, b.public_id))))
    }

    /// Gets every list belonging to a board.
    ///
    /// Results come back in storage order, not display order.
    ///
    /// # Arguments
    /// - `board_public_id` - Public id of the board
    ///
    /// # Returns
    /// - `Ok(Vec<List>)` - Lists of the board, empty when the board has none or doesn't exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_board(&self, board_public_id: Uuid) -> Result<Vec<List>, DbErr> {
        let lists = entity::prelude::List::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::list::Relation::Board.def(),
            )
            .filter(entity::board::Column::PublicId.eq(board_public_id))
            .order_by_asc(entity::list::Column::Id)
            .all(self.db)
            .await?;

        Ok(lists
            .into_iter()
            .map(|l| List::from_entity(l, board_public_id))
            .collect())
    }

    /// Updates a list's title and description.
    ///
    /// Board and identity columns are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(List))` - The updated list
    /// - `Ok(None)` - No list with that public id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateListParams) -> Result<Option<List>, DbErr> {
        let Some((list, Some(board))) = entity::prelude::List::find()
            .filter(entity::list::Column::PublicId.eq(params.public_id))
            .find_also_related(entity::prelude::Board)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::list::ActiveModel = list.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(List::from_entity(entity, board.public_id)))
    }

    /// Deletes a list by internal id.
    ///
    /// # Returns
    /// - `Ok(true)` - The list was deleted
    /// - `Ok(false)` - No list with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::List::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
