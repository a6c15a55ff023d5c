use super::*;

/// Tests creating a board for an existing user.
///
/// Expected: Ok(Board) owned by the user, without a position record
#[tokio::test]
async fn creates_board() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let service = BoardService::new(db);
    let board = service
        .create(CreateBoardParams {
            owner_public_id: owner.public_id,
            title: "Sprint".to_string(),
            description: None,
        })
        .await?;

    assert_eq!(board.owner_id, owner.id);
    assert_eq!(board.title, "Sprint");

    let fetched = service.get_by_public_id(board.public_id).await?;
    assert_eq!(fetched.map(|b| b.id), Some(board.id));

    let position = crate::server::data::list_position::ListPositionRepository::new(db)
        .get_by_board_id(board.id)
        .await?;
    assert!(position.is_none());

    Ok(())
}

/// Tests creating a board for a user that does not exist.
///
/// Expected: Err(BoardError::OwnerNotFound)
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner_public_id = Uuid::new_v4();

    let service = BoardService::new(db);
    let result = service
        .create(CreateBoardParams {
            owner_public_id,
            title: "Sprint".to_string(),
            description: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BoardErr(BoardError::OwnerNotFound(id))) if id == owner_public_id
    ));

    Ok(())
}
