use super::*;

/// Tests reading the stored order of a board.
///
/// Expected: Ok(Some(order)) identical to what was stored
#[tokio::test]
async fn returns_stored_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, lists, _position) =
        factory::helpers::create_board_with_lists(db, &["a", "b", "c"]).await?;

    let repo = ListPositionRepository::new(db);
    let order = repo.get_order(board.public_id).await?;

    let expected: Vec<Uuid> = lists.iter().map(|l| l.public_id).collect();
    assert_eq!(order, Some(expected));

    Ok(())
}

/// Tests that stale and duplicated ids are returned as stored.
///
/// Expected: Ok(Some(order)) including ids without a matching list
#[tokio::test]
async fn returns_stale_ids_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let stale = Uuid::new_v4();
    factory::create_list_position(db, board.id, vec![stale, stale]).await?;

    let repo = ListPositionRepository::new(db);
    let order = repo.get_order(board.public_id).await?;

    assert_eq!(order, Some(vec![stale, stale]));

    Ok(())
}

/// Tests reading the order of a board without a position record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;

    let repo = ListPositionRepository::new(db);

    assert!(repo.get_order(board.public_id).await?.is_none());
    assert!(repo.get_order(Uuid::new_v4()).await?.is_none());

    Ok(())
}
