use super::*;

/// Tests overwriting the stored order.
///
/// Expected: Ok(ListPosition) with the new order persisted
#[tokio::test]
async fn overwrites_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, lists, _position) =
        factory::helpers::create_board_with_lists(db, &["a", "b"]).await?;

    let repo = ListPositionRepository::new(db);
    let mut position = repo.get_by_board_id(board.id).await?.unwrap();
    position.list_order = vec![lists[1].public_id, lists[0].public_id];

    let updated = repo.update_order(&position).await?;

    assert_eq!(updated.list_order, position.list_order);
    assert_eq!(
        repo.get_order(board.public_id).await?,
        Some(vec![lists[1].public_id, lists[0].public_id])
    );

    Ok(())
}

/// Tests that an update inside a rolled back transaction leaves the order unchanged.
///
/// Expected: the original order is still stored
#[tokio::test]
async fn rollback_discards_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, lists, _position) =
        factory::helpers::create_board_with_lists(db, &["a", "b"]).await?;

    {
        let txn = db.begin().await?;
        let repo = ListPositionRepository::new(&txn);
        let mut position = repo.get_by_board_id_for_update(board.id).await?.unwrap();
        position.list_order.clear();
        repo.update_order(&position).await?;
        txn.rollback().await?;
    }

    let order = ListPositionRepository::new(db).get_order(board.public_id).await?;
    assert_eq!(order, Some(vec![lists[0].public_id, lists[1].public_id]));

    Ok(())
}
