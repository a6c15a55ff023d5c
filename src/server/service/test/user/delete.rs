use super::*;
use crate::server::{data::list_position::ListPositionRepository, service::list::ListService};
use sea_orm::EntityTrait;

/// Tests deleting a user who owns a board with lists.
///
/// Verifies that the board, its lists and its list order are removed with the user.
///
/// Expected: Ok(()) and nothing left behind
#[tokio::test]
async fn deletes_user_with_owned_boards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, lists, _position) =
        factory::helpers::create_board_with_lists(db, &["a", "b"]).await?;
    let owner = entity::prelude::User::find_by_id(board.owner_id)
        .one(db)
        .await?
        .unwrap();

    let service = UserService::new(db);
    service.delete(owner.public_id).await?;

    assert!(service.get_by_public_id(owner.public_id).await?.is_none());
    assert!(ListService::new(db)
        .get_by_public_id(lists[0].public_id)
        .await?
        .is_none());
    assert!(ListPositionRepository::new(db)
        .get_order(board.public_id)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Err(UserError::NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service.delete(Uuid::new_v4()).await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::NotFound(_)))
    ));

    Ok(())
}
