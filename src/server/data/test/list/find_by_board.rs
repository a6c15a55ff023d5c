use super::*;

/// Tests fetching every list of a board.
///
/// Verifies that lists of other boards are excluded.
///
/// Expected: Ok(Vec<List>) containing only the board's lists
#[tokio::test]
async fn returns_lists_of_board_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, lists, _position) =
        factory::helpers::create_board_with_lists(db, &["a", "b", "c"]).await?;
    let (_other, _other_lists, _other_position) =
        factory::helpers::create_board_with_lists(db, &["x"]).await?;

    let repo = ListRepository::new(db);
    let found = repo.find_by_board(board.public_id).await?;

    assert_eq!(found.len(), 3);
    for list in &lists {
        assert!(found.iter().any(|l| l.public_id == list.public_id));
    }
    assert!(found.iter().all(|l| l.board_public_id == board.public_id));

    Ok(())
}

/// Tests fetching lists of a board without any.
///
/// Expected: Ok(empty Vec) for an empty board and for an unknown board
#[tokio::test]
async fn returns_empty_for_board_without_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;

    let repo = ListRepository::new(db);

    assert!(repo.find_by_board(board.public_id).await?.is_empty());
    assert!(repo.find_by_board(Uuid::new_v4()).await?.is_empty());

    Ok(())
}
