use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{
            catalog::{CatalogError, ConstraintViolationExt},
            Error,
        },
        model::kind::EntityKind,
    },
};

/// Service for managing user accounts.
///
/// Every user returned is a [`UserDto`], which has no password field.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user subscribed as of now, active unless `is_active` is `false`.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The new user with its assigned ID
    /// - `Err(CatalogError::UniquenessViolation)` - The email is already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.get_by_email(&user.email).await?.is_some() {
            return Err(email_taken(&user.email).into());
        }

        let email = user.email.clone();
        let user = user_repo
            .create(user)
            .await
            .on_unique_violation(|| email_taken(&email))?;

        txn.commit().await?;

        Ok(user.into())
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user
    /// - `Err(CatalogError::NotFound)` - No user with the ID exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, user_id: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_id(user_id).await? {
            Some(user) => Ok(user.into()),
            None => Err(CatalogError::not_found(EntityKind::User, user_id).into()),
        }
    }

    /// Retrieves a user by email.
    pub async fn get_by_email(&self, email: &str) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_email(email).await? {
            Some(user) => Ok(user.into()),
            None => Err(CatalogError::not_found_by(EntityKind::User, "email", email).into()),
        }
    }

    /// Retrieves every user ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user
    /// - `Err(CatalogError::NotFound)` - No user with the ID exists
    /// - `Err(CatalogError::UniquenessViolation)` - The new email belongs to another user
    pub async fn update(&self, user_id: i32, update: UpdateUserDto) -> Result<UserDto, Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::User, user_id).into());
        }
        if let Some(email) = &update.email {
            if let Some(existing) = user_repo.get_by_email(email).await? {
                if existing.id != user_id {
                    return Err(email_taken(email).into());
                }
            }
        }

        let email = update.email.clone().unwrap_or_default();
        let user = user_repo
            .update(user_id, update)
            .await
            .on_unique_violation(|| email_taken(&email))?
            .ok_or_else(|| CatalogError::not_found(EntityKind::User, user_id))?;

        txn.commit().await?;

        Ok(user.into())
    }

    /// Deletes a user along with all of their favorites.
    ///
    /// # Returns
    /// - `Ok(())` - The user and their favorites were deleted
    /// - `Err(CatalogError::NotFound)` - No user with the ID exists
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete(&self, user_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::User, user_id).into());
        }

        let favorites = FavoriteRepository::new(&txn)
            .delete_many_by_user_id(user_id)
            .await?;
        user_repo.delete(user_id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted user ID {} with {} favorites", user_id, favorites);

        Ok(())
    }
}

fn email_taken(email: &str) -> CatalogError {
    CatalogError::uniqueness_violation(EntityKind::User, "email", email)
}
