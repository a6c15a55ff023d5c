use super::*;

/// Tests fetching users by public id.
///
/// Expected: Ok(Some(User)) for a stored user, Ok(None) otherwise
#[tokio::test]
async fn gets_user_by_public_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let service = UserService::new(db);

    let user = service.get_by_public_id(created.public_id).await?.unwrap();
    assert_eq!(user.email, created.email);

    assert!(service.get_by_public_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
