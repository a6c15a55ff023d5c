use super::*;

/// Tests finding a list by public id and by internal id.
///
/// Expected: Ok(Some(List)) resolved with its board's public id
#[tokio::test]
async fn finds_existing_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (board, lists, _position) = factory::helpers::create_board_with_lists(db, &["Doing"]).await?;
    let created = &lists[0];

    let repo = ListRepository::new(db);

    let by_public_id = repo.find_by_public_id(created.public_id).await?.unwrap();
    assert_eq!(by_public_id.id, created.id);
    assert_eq!(by_public_id.board_public_id, board.public_id);
    assert_eq!(by_public_id.title, "Doing");

    let by_id = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(by_id.public_id, created.public_id);

    Ok(())
}

/// Tests querying for a list that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_list_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListRepository::new(db);

    assert!(repo.find_by_public_id(Uuid::new_v4()).await?.is_none());
    assert!(repo.find_by_id(7).await?.is_none());

    Ok(())
}
