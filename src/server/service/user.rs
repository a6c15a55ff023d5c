use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{user::UserError, AppError},
    model::user::{CreateUserParam, CreateUserParams, UpdateUserParams, User},
    util::parse::require_text,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user with a freshly generated public id.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::ValidationErr)` - Blank name or email
    /// - `Err(AppError::UserErr(EmailTaken))` - Another user already uses the email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let name = require_text("name", params.name)?;
        let email = require_text("email", params.email)?;

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&email).await?.is_some() {
            return Err(UserError::EmailTaken(email).into());
        }

        let user = repo
            .create(CreateUserParam {
                public_id: Uuid::new_v4(),
                name,
                email,
            })
            .await?;

        tracing::info!("Created user {}", user.public_id);

        Ok(user)
    }

    /// Gets a user by public id
    pub async fn get_by_public_id(&self, public_id: Uuid) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_public_id(public_id)
            .await?;

        Ok(user)
    }

    /// Updates a user's name and email.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::ValidationErr)` - Blank name or email
    /// - `Err(AppError::UserErr(EmailTaken))` - The email belongs to another user
    /// - `Err(AppError::UserErr(NotFound))` - No user with the given public id
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let public_id = params.public_id;
        let name = require_text("name", params.name)?;
        let email = require_text("email", params.email)?;

        let repo = UserRepository::new(self.db);

        if let Some(existing) = repo.find_by_email(&email).await? {
            if existing.public_id != public_id {
                return Err(UserError::EmailTaken(email).into());
            }
        }

        let user = repo
            .update(UpdateUserParams {
                public_id,
                name,
                email,
            })
            .await?
            .ok_or(UserError::NotFound(public_id))?;

        tracing::info!("Updated user {}", user.public_id);

        Ok(user)
    }

    /// Deletes a user together with the boards they own.
    ///
    /// # Returns
    /// - `Ok(())` - The user was deleted
    /// - `Err(AppError::UserErr(NotFound))` - No user with the given public id
    pub async fn delete(&self, public_id: Uuid) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_public_id(public_id)
            .await?
            .ok_or(UserError::NotFound(public_id))?;

        if !repo.delete(user.id).await? {
            return Err(UserError::NotFound(public_id).into());
        }

        tracing::info!("Deleted user {}", public_id);

        Ok(())
    }
}
