use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::model::db::UserModel,
};

/// Repository over the `user` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user subscribed as of now
    pub async fn create(&self, user: CreateUserDto) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            subscription_date: ActiveValue::Set(Utc::now().naive_utc()),
            is_active: ActiveValue::Set(user.is_active.unwrap_or(true)),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Gets a user by its unique email, compared exactly
    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets every user, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided changes to a user, `Ok(None)` if the user does not exist
    pub async fn update(
        &self,
        user_id: i32,
        update: UpdateUserDto,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.clone().into_active_model();
        if let Some(email) = update.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(password) = update.password {
            user_am.password = ActiveValue::Set(password);
        }
        if let Some(first_name) = update.first_name {
            user_am.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            user_am.last_name = ActiveValue::Set(last_name);
        }
        if let Some(is_active) = update.is_active {
            user_am.is_active = ActiveValue::Set(is_active);
        }

        if !user_am.is_changed() {
            return Ok(Some(user));
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
