//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a board together with the user owning it.
///
/// Both entities are created with default values. Use the individual factories if you
/// need to customize either of them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, board))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_board_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::board::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let board = crate::factory::board::create_board(db, user.id).await?;

    Ok((user, board))
}

/// Creates a board with lists and a position record listing them in creation order.
///
/// Produces the same persisted state the list service leaves behind after creating
/// each list in turn.
///
/// # Arguments
/// - `db` - Database connection
/// - `titles` - Titles of the lists to create, in display order
///
/// # Returns
/// - `Ok((board, lists, position))` - Board, created lists and the position record
/// - `Err(DbErr)` - Database error during creation
pub async fn create_board_with_lists(
    db: &DatabaseConnection,
    titles: &[&str],
) -> Result<
    (
        entity::board::Model,
        Vec<entity::list::Model>,
        entity::list_position::Model,
    ),
    DbErr,
> {
    let (_user, board) = create_board_with_owner(db).await?;

    let mut lists = Vec::with_capacity(titles.len());
    for title in titles {
        let list = crate::factory::list::ListFactory::new(db, board.id)
            .title(*title)
            .build()
            .await?;
        lists.push(list);
    }

    let order = lists.iter().map(|l| l.public_id).collect();
    let position = crate::factory::list_position::create_list_position(db, board.id, order).await?;

    Ok((board, lists, position))
}
