//! Ordering service joining the list store and the position store.
//!
//! Every board keeps the display order of its lists in a single position record. Writes
//! that touch both stores run in one transaction; reads reconcile the stored order
//! against the lists that actually exist.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{board::BoardRepository, list::ListRepository, list_position::ListPositionRepository},
    error::{list::ListError, AppError},
    model::{
        board::Board,
        list::{CreateListParam, CreateListParams, List, ListWithOrder, UpdateListParams},
        list_position::CreateListPositionParam,
    },
    util::{ordering::sort_lists_by_position, parse::require_text},
};

pub struct ListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a list and appends it to the end of its board's order.
    ///
    /// The list insert and the position update share one transaction, so either both
    /// are stored or neither is. The first list of a board creates the board's position
    /// record.
    ///
    /// # Arguments
    /// - `params` - Target board, optional client-chosen public id, title and description
    ///
    /// # Returns
    /// - `Ok(List)` - The created list
    /// - `Err(AppError::ListErr(BoardNotFound))` - No board with the given public id
    /// - `Err(AppError::ValidationErr)` - Blank title
    /// - `Err(AppError::ListErr(Transaction))` - Beginning or committing the transaction failed
    /// - `Err(AppError::DbErr)` - Insert or position update failed; nothing was stored
    pub async fn create(&self, params: CreateListParams) -> Result<List, AppError> {
        let title = require_text("title", params.title)?;
        let board = self.find_board(params.board_public_id).await?;
        let public_id = params.public_id.unwrap_or_else(Uuid::new_v4);

        let txn = self.db.begin().await.map_err(ListError::Transaction)?;

        let list = ListRepository::new(&txn)
            .create(CreateListParam {
                public_id,
                board_id: board.id,
                board_public_id: board.public_id,
                title,
                description: params.description,
            })
            .await?;

        Self::append_to_order(&txn, board.id, list.public_id).await?;

        txn.commit().await.map_err(ListError::Transaction)?;

        tracing::info!("Created list {} on board {}", list.public_id, board.public_id);

        Ok(list)
    }

    /// Appends a list id to the board's position record, creating the record if needed.
    ///
    /// When two transactions both find no record, the insert of the slower one does
    /// nothing and it appends to the record the faster one created. The re-read only
    /// runs where two transactions can both pass the lookup before either inserts, which
    /// needs a backend with concurrent writers. SQLite serializes writers.
    async fn append_to_order(
        txn: &DatabaseTransaction,
        board_id: i32,
        list_public_id: Uuid,
    ) -> Result<(), DbErr> {
        let repo = ListPositionRepository::new(txn);

        let mut position = match repo.get_by_board_id_for_update(board_id).await? {
            Some(position) => position,
            None => {
                let inserted = repo
                    .create_if_absent(CreateListPositionParam {
                        public_id: Uuid::new_v4(),
                        board_id,
                        list_order: vec![list_public_id],
                    })
                    .await?;

                if inserted {
                    return Ok(());
                }

                tracing::debug!("Position record for board {} created concurrently", board_id);

                repo.get_by_board_id_for_update(board_id)
                    .await?
                    .ok_or_else(|| {
                        DbErr::RecordNotFound(format!(
                            "List position for board {} vanished after conflict",
                            board_id
                        ))
                    })?
            }
        };

        position.list_order.push(list_public_id);
        repo.update_order(&position).await?;

        Ok(())
    }

    /// Gets the lists of a board in display order.
    ///
    /// Ids in the stored order without a matching list are skipped, and lists missing
    /// from the order are not returned. The stored order is returned unchanged next to
    /// the reconciled lists.
    ///
    /// # Returns
    /// - `Ok(ListWithOrder)` - Stored order and the lists sorted by it
    /// - `Err(AppError::ListErr(BoardNotFound))` - No board with the given public id
    /// - `Err(AppError::ListErr(OrderNotFound))` - The board has no position record
    /// - `Err(AppError::ListErr(EmptyOrder))` - The position record holds no ids
    /// - `Err(AppError::ListErr(ListFetch))` - Fetching the lists failed
    pub async fn get_ordered(&self, board_public_id: Uuid) -> Result<ListWithOrder, AppError> {
        let board = self.find_board(board_public_id).await?;

        let positions = ListPositionRepository::new(self.db)
            .get_order(board.public_id)
            .await?
            .ok_or(ListError::OrderNotFound(board.public_id))?;

        if positions.is_empty() {
            tracing::warn!("Board {} has an empty list position record", board.public_id);
            return Err(ListError::EmptyOrder(board.public_id).into());
        }

        let lists = ListRepository::new(self.db)
            .find_by_board(board.public_id)
            .await
            .map_err(ListError::ListFetch)?;

        let lists = sort_lists_by_position(lists, &positions);

        tracing::debug!(
            "Resolved {} of {} ordered lists for board {}",
            lists.len(),
            positions.len(),
            board.public_id
        );

        Ok(ListWithOrder { positions, lists })
    }

    /// Replaces a board's stored order wholesale.
    ///
    /// The new order is stored as given. It is not checked against the board's lists, so
    /// it may drop, repeat or reference unknown ids. Concurrent calls resolve as last
    /// writer wins.
    ///
    /// # Returns
    /// - `Ok(())` - The order was stored
    /// - `Err(AppError::ListErr(BoardNotFound))` - No board with the given public id
    /// - `Err(AppError::ListErr(OrderNotFound))` - The board has no position record
    /// - `Err(AppError::ListErr(Transaction))` - Beginning or committing the transaction failed
    pub async fn update_positions(
        &self,
        board_public_id: Uuid,
        positions: Vec<Uuid>,
    ) -> Result<(), AppError> {
        let board = self.find_board(board_public_id).await?;

        let txn = self.db.begin().await.map_err(ListError::Transaction)?;
        let repo = ListPositionRepository::new(&txn);

        let mut position = repo
            .get_by_board_id_for_update(board.id)
            .await?
            .ok_or(ListError::OrderNotFound(board.public_id))?;

        position.list_order = positions;
        repo.update_order(&position).await?;

        txn.commit().await.map_err(ListError::Transaction)?;

        tracing::info!(
            "Updated list positions for board {} ({} entries)",
            board.public_id,
            position.list_order.len()
        );

        Ok(())
    }

    /// Gets a list by internal id
    #[cfg(test)]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<List>, AppError> {
        let list = ListRepository::new(self.db).find_by_id(id).await?;

        Ok(list)
    }

    /// Gets a list by public id
    pub async fn get_by_public_id(&self, public_id: Uuid) -> Result<Option<List>, AppError> {
        let list = ListRepository::new(self.db)
            .find_by_public_id(public_id)
            .await?;

        Ok(list)
    }

    /// Updates a list's title and description.
    ///
    /// The list keeps its public id, board and place in the order.
    ///
    /// # Returns
    /// - `Ok(List)` - The updated list
    /// - `Err(AppError::ListErr(ListNotFound))` - No list with the given public id
    /// - `Err(AppError::ValidationErr)` - Blank title
    pub async fn update(&self, params: UpdateListParams) -> Result<List, AppError> {
        let public_id = params.public_id;
        let params = UpdateListParams {
            title: require_text("title", params.title)?,
            ..params
        };

        let list = ListRepository::new(self.db)
            .update(params)
            .await?
            .ok_or(ListError::ListNotFound(public_id))?;

        tracing::info!("Updated list {}", list.public_id);

        Ok(list)
    }

    /// Deletes a list and removes it from its board's order.
    ///
    /// Every occurrence of the list's public id is pruned from the position record in the
    /// same transaction as the delete.
    ///
    /// # Returns
    /// - `Ok(())` - The list was deleted
    /// - `Err(AppError::ListErr(ListNotFoundById))` - No list with the given id
    /// - `Err(AppError::ListErr(Transaction))` - Beginning or committing the transaction failed
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await.map_err(ListError::Transaction)?;

        let list_repo = ListRepository::new(&txn);
        let list = list_repo
            .find_by_id(id)
            .await?
            .ok_or(ListError::ListNotFoundById(id))?;

        list_repo.delete(list.id).await?;

        let position_repo = ListPositionRepository::new(&txn);
        if let Some(mut position) = position_repo.get_by_board_id_for_update(list.board_id).await? {
            let before = position.list_order.len();
            position.list_order.retain(|id| *id != list.public_id);

            if position.list_order.len() != before {
                position_repo.update_order(&position).await?;
            }
        }

        txn.commit().await.map_err(ListError::Transaction)?;

        tracing::info!(
            "Deleted list {} from board {}",
            list.public_id,
            list.board_public_id
        );

        Ok(())
    }

    async fn find_board(&self, board_public_id: Uuid) -> Result<Board, AppError> {
        let board = BoardRepository::new(self.db)
            .find_by_public_id(board_public_id)
            .await?
            .ok_or(ListError::BoardNotFound(board_public_id))?;

        Ok(board)
    }
}
