use super::*;

/// Tests finding an existing user by public id.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("Grace")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_public_id(created.public_id).await?;

    let user = user.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "Grace");

    Ok(())
}

/// Tests querying for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_public_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_public_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
