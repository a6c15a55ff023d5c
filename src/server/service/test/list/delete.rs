use super::*;

/// Tests deleting a list.
///
/// Verifies that the list is removed from the stored order in the same operation.
///
/// Expected: Ok(()) and an order without the deleted list
#[tokio::test]
async fn deletes_list_and_prunes_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, lists, _position) =
        factory::helpers::create_board_with_lists(db, &["a", "b", "c"]).await?;

    let service = ListService::new(db);
    service.delete(lists[1].id).await?;

    assert!(service.get_by_id(lists[1].id).await?.is_none());

    let result = service.get_ordered(board.public_id).await?;
    assert_eq!(result.positions, vec![lists[0].public_id, lists[2].public_id]);
    let titles: Vec<&str> = result.lists.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c"]);

    Ok(())
}

/// Tests that every occurrence of a duplicated id is pruned.
///
/// Expected: the deleted list's id no longer appears in the order
#[tokio::test]
async fn prunes_duplicated_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let a = factory::create_list(db, board.id).await?;
    let b = factory::create_list(db, board.id).await?;
    factory::create_list_position(db, board.id, vec![a.public_id, b.public_id, a.public_id])
        .await?;

    let service = ListService::new(db);
    service.delete(a.id).await?;

    assert_eq!(
        ListPositionRepository::new(db).get_order(board.public_id).await?,
        Some(vec![b.public_id])
    );

    Ok(())
}

/// Tests deleting a list of a board without a position record.
///
/// Expected: Ok(()) without creating a record
#[tokio::test]
async fn deletes_list_without_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::create_list(db, board.id).await?;

    let service = ListService::new(db);
    service.delete(list.id).await?;

    assert!(service.get_by_public_id(list.public_id).await?.is_none());
    assert!(ListPositionRepository::new(db)
        .get_by_board_id(board.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a list that does not exist.
///
/// Expected: Err(ListError::ListNotFoundById)
#[tokio::test]
async fn fails_for_unknown_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ListService::new(db);
    let result = service.delete(404).await;

    assert!(matches!(
        result,
        Err(AppError::ListErr(ListError::ListNotFoundById(404)))
    ));

    Ok(())
}
