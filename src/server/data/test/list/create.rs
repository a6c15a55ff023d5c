use super::*;

/// Tests creating a list on an existing board.
///
/// Verifies that the list carries the board's public id and identical creation and
/// update timestamps.
///
/// Expected: Ok(List) with matching fields
#[tokio::test]
async fn creates_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;

    let repo = ListRepository::new(db);
    let public_id = Uuid::new_v4();
    let list = repo
        .create(CreateListParam {
            public_id,
            board_id: board.id,
            board_public_id: board.public_id,
            title: "Todo".to_string(),
            description: None,
        })
        .await?;

    assert_eq!(list.public_id, public_id);
    assert_eq!(list.board_id, board.id);
    assert_eq!(list.board_public_id, board.public_id);
    assert_eq!(list.title, "Todo");
    assert_eq!(list.created_at, list.updated_at);

    Ok(())
}

/// Tests that a public id cannot be reused.
///
/// Expected: Err(DbErr) from the unique constraint
#[tokio::test]
async fn rejects_duplicate_public_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let existing = factory::create_list(db, board.id).await?;

    let repo = ListRepository::new(db);
    let result = repo
        .create(CreateListParam {
            public_id: existing.public_id,
            board_id: board.id,
            board_public_id: board.public_id,
            title: "Copy".to_string(),
            description: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
