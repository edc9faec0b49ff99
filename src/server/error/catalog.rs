use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};

use crate::{
    model::{api::ErrorDto, favorite::FavoriteKind},
    server::{error::Error, model::kind::EntityKind},
};

/// Rejections of catalog operations.
///
/// None of these leave partial writes behind, the surrounding transaction is rolled back.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// A unique column (`name`, or `email` for users) already holds the value.
    #[error("{entity} with {field} {value:?} already exists")]
    UniquenessViolation {
        /// Kind of row that holds the value
        entity: EntityKind,
        /// Name of the unique column
        field: &'static str,
        /// The colliding value
        value: String,
    },
    /// A referenced row does not exist.
    #[error("{field} references {entity} ID {id} which does not exist")]
    ReferenceError {
        /// Kind of the referenced row
        entity: EntityKind,
        /// Name of the reference column
        field: &'static str,
        /// The dangling ID
        id: i32,
    },
    /// The requested row or favorite association does not exist.
    #[error("{entity} {key} not found")]
    NotFound {
        /// Kind of the missing row
        entity: EntityKind,
        /// How the row was looked up, e.g. `ID 4`
        key: String,
    },
    /// The user has already favorited the target.
    #[error("User ID {user_id} has already favorited {kind} ID {target_id}")]
    AlreadyExists {
        /// Kind of the favorited entry
        kind: FavoriteKind,
        /// ID of the user
        user_id: i32,
        /// ID of the favorited entry
        target_id: i32,
    },
}

impl CatalogError {
    /// Unique column `field` of `entity` already holds `value`
    pub fn uniqueness_violation(
        entity: EntityKind,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::UniquenessViolation {
            entity,
            field,
            value: value.into(),
        }
    }

    /// Reference column `field` points at a row of `entity` that does not exist
    pub fn reference_error(entity: EntityKind, field: &'static str, id: i32) -> Self {
        Self::ReferenceError { entity, field, id }
    }

    /// Row of `entity` with the provided ID does not exist
    pub fn not_found(entity: EntityKind, id: i32) -> Self {
        Self::NotFound {
            entity,
            key: format!("ID {}", id),
        }
    }

    /// Row of `entity` with the provided unique key does not exist
    pub fn not_found_by(entity: EntityKind, field: &'static str, value: &str) -> Self {
        Self::NotFound {
            entity,
            key: format!("with {} {:?}", field, value),
        }
    }

    /// Favorite association between the user and target does not exist
    pub fn favorite_not_found(kind: FavoriteKind, user_id: i32, target_id: i32) -> Self {
        Self::NotFound {
            entity: EntityKind::Favorite(kind),
            key: format!("for user ID {} and {} ID {}", user_id, kind, target_id),
        }
    }
}

/// Maps catalog errors to HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `UniquenessViolation` and `AlreadyExists`
/// - 422 Unprocessable Entity - For `ReferenceError`
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UniquenessViolation { .. } | Self::AlreadyExists { .. } => StatusCode::CONFLICT,
            Self::ReferenceError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Classifies constraint violations raised by the database on a write.
///
/// Uniqueness and referential integrity are enforced by the schema, services check
/// beforehand to produce precise errors but still rely on this mapping when a concurrent
/// writer gets in between the check and the write.
pub(crate) trait ConstraintViolationExt<T> {
    /// Converts a unique constraint violation into the error built by `unique`.
    fn on_unique_violation<U>(self, unique: U) -> Result<T, Error>
    where
        U: FnOnce() -> CatalogError;

    /// Converts unique and foreign key constraint violations into catalog errors.
    fn on_constraint_violation<U, R>(self, unique: U, reference: R) -> Result<T, Error>
    where
        U: FnOnce() -> CatalogError,
        R: FnOnce() -> CatalogError;
}

impl<T> ConstraintViolationExt<T> for Result<T, DbErr> {
    fn on_unique_violation<U>(self, unique: U) -> Result<T, Error>
    where
        U: FnOnce() -> CatalogError,
    {
        self.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => unique().into(),
            _ => err.into(),
        })
    }

    fn on_constraint_violation<U, R>(self, unique: U, reference: R) -> Result<T, Error>
    where
        U: FnOnce() -> CatalogError,
        R: FnOnce() -> CatalogError,
    {
        self.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => unique().into(),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => reference().into(),
            _ => err.into(),
        })
    }
}
