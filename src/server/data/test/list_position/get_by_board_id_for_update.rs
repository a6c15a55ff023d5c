use super::*;

/// Tests reading a position record inside a transaction.
///
/// Expected: Ok(Some(ListPosition)) within the transaction, Ok(None) for a board without
/// a record
#[tokio::test]
async fn reads_record_inside_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, lists, position) = factory::helpers::create_board_with_lists(db, &["a"]).await?;
    let (_owner, empty_board) = factory::helpers::create_board_with_owner(db).await?;

    let txn = db.begin().await?;
    let repo = ListPositionRepository::new(&txn);

    let locked = repo.get_by_board_id_for_update(board.id).await?.unwrap();
    assert_eq!(locked.id, position.id);
    assert_eq!(locked.list_order, vec![lists[0].public_id]);

    assert!(repo
        .get_by_board_id_for_update(empty_board.id)
        .await?
        .is_none());

    txn.commit().await?;

    Ok(())
}
