use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::db::UserModel;

/// External representation of a user.
///
/// Has no credential field, so a password can never be serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub subscription_date: NaiveDateTime,
    pub is_active: bool,
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            subscription_date: user.subscription_date,
            is_active: user.is_active,
        }
    }
}

#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    /// Stored as given, hashing belongs to the caller.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Defaults to `true` when omitted.
    pub is_active: Option<bool>,
}

impl fmt::Debug for CreateUserDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserDto")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("is_active", &self.is_active)
            .finish()
    }
}

#[derive(Clone, Default, Deserialize)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl fmt::Debug for UpdateUserDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserDto")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("is_active", &self.is_active)
            .finish()
    }
}
