use super::*;

/// Tests resolving a board's public id to its record.
///
/// Expected: Ok(Some(Board)) with the internal id of the stored board
#[tokio::test]
async fn finds_existing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, created) = factory::helpers::create_board_with_owner(db).await?;

    let repo = BoardRepository::new(db);
    let board = repo.find_by_public_id(created.public_id).await?.unwrap();

    assert_eq!(board.id, created.id);
    assert_eq!(board.title, created.title);

    let by_id = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(by_id.public_id, created.public_id);

    Ok(())
}

/// Tests querying for a board that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);

    assert!(repo.find_by_public_id(Uuid::new_v4()).await?.is_none());
    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
