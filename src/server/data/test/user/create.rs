use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the given public id, name and email and assigns
/// an internal id.
///
/// Expected: Ok(User) with matching fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let public_id = Uuid::new_v4();
    let user = repo
        .create(CreateUserParam {
            public_id,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.public_id, public_id);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");

    Ok(())
}

/// Tests that two users cannot share an email address.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = |name: &str| CreateUserParam {
        public_id: Uuid::new_v4(),
        name: name.to_string(),
        email: "shared@example.com".to_string(),
    };

    repo.create(param("first")).await?;
    let result = repo.create(param("second")).await;

    assert!(result.is_err());

    Ok(())
}
