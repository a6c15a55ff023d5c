use super::*;

/// Tests reading lists in stored order.
///
/// Expected: Ok(ListWithOrder) with lists following the stored order
#[tokio::test]
async fn returns_lists_in_stored_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let a = factory::list::ListFactory::new(db, board.id).title("a").build().await?;
    let b = factory::list::ListFactory::new(db, board.id).title("b").build().await?;
    let c = factory::list::ListFactory::new(db, board.id).title("c").build().await?;
    let order = vec![c.public_id, a.public_id, b.public_id];
    factory::create_list_position(db, board.id, order.clone()).await?;

    let service = ListService::new(db);
    let result = service.get_ordered(board.public_id).await?;

    assert_eq!(result.positions, order);
    let titles: Vec<&str> = result.lists.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);

    Ok(())
}

/// Tests that reading twice without writes yields the same result.
///
/// Expected: identical results
#[tokio::test]
async fn repeated_reads_are_identical() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, _lists, _position) =
        factory::helpers::create_board_with_lists(db, &["a", "b", "c"]).await?;

    let service = ListService::new(db);
    let first = service.get_ordered(board.public_id).await?;
    let second = service.get_ordered(board.public_id).await?;

    assert_eq!(first.positions, second.positions);
    assert_eq!(first.lists, second.lists);

    Ok(())
}

/// Tests reconciling a stale order.
///
/// The order references a missing list `y`, and list `z` is absent from the order.
///
/// Expected: only `x` is returned, the raw order is returned unchanged
#[tokio::test]
async fn drops_stale_ids_and_unordered_lists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let x = factory::list::ListFactory::new(db, board.id).title("x").build().await?;
    let _z = factory::list::ListFactory::new(db, board.id).title("z").build().await?;
    let y = Uuid::new_v4();
    factory::create_list_position(db, board.id, vec![x.public_id, y]).await?;

    let service = ListService::new(db);
    let result = service.get_ordered(board.public_id).await?;

    assert_eq!(result.positions, vec![x.public_id, y]);
    assert_eq!(result.lists.len(), 1);
    assert_eq!(result.lists[0].public_id, x.public_id);

    Ok(())
}

/// Tests reading a board whose position record is empty.
///
/// Expected: Err(ListError::EmptyOrder)
#[tokio::test]
async fn fails_for_empty_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;
    factory::create_list(db, board.id).await?;
    factory::create_list_position(db, board.id, vec![]).await?;

    let service = ListService::new(db);
    let result = service.get_ordered(board.public_id).await;

    assert!(matches!(
        result,
        Err(AppError::ListErr(ListError::EmptyOrder(_)))
    ));

    Ok(())
}

/// Tests reading a board without a position record.
///
/// Expected: Err(ListError::OrderNotFound)
#[tokio::test]
async fn fails_without_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;

    let service = ListService::new(db);
    let result = service.get_ordered(board.public_id).await;

    assert!(matches!(
        result,
        Err(AppError::ListErr(ListError::OrderNotFound(_)))
    ));

    Ok(())
}

/// Tests reading lists of a board that does not exist.
///
/// Expected: Err(ListError::BoardNotFound)
#[tokio::test]
async fn fails_for_unknown_board() -> Result<(), AppError> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ListService::new(db);
    let result = service.get_ordered(Uuid::new_v4()).await;

    assert!(matches!(
        result,
        Err(AppError::ListErr(ListError::BoardNotFound(_)))
    ));

    Ok(())
}
