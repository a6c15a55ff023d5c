use super::*;

/// Tests inserting the first position record of a board.
///
/// Expected: Ok(true) and the record is readable afterwards
#[tokio::test]
async fn inserts_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let first = Uuid::new_v4();

    let repo = ListPositionRepository::new(db);
    let inserted = repo
        .create_if_absent(CreateListPositionParam {
            public_id: Uuid::new_v4(),
            board_id: board.id,
            list_order: vec![first],
        })
        .await?;

    assert!(inserted);
    assert_eq!(repo.get_order(board.public_id).await?, Some(vec![first]));

    Ok(())
}

/// Tests that an existing record is neither replaced nor turned into an error.
///
/// Expected: Ok(false) and the stored order is unchanged
#[tokio::test]
async fn keeps_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let existing = Uuid::new_v4();
    factory::create_list_position(db, board.id, vec![existing]).await?;

    let repo = ListPositionRepository::new(db);
    let inserted = repo
        .create_if_absent(CreateListPositionParam {
            public_id: Uuid::new_v4(),
            board_id: board.id,
            list_order: vec![Uuid::new_v4()],
        })
        .await?;

    assert!(!inserted);
    assert_eq!(repo.get_order(board.public_id).await?, Some(vec![existing]));

    Ok(())
}
