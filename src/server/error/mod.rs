//! Error types for the catalog.
//!
//! Domain failures (uniqueness, references, missing rows, duplicate favorites) live in
//! [`CatalogError`]; configuration failures in [`ConfigError`]. Both, along with storage
//! and logging setup errors, convert into the top-level [`Error`] via `?`. Every error
//! implements `IntoResponse` so the web layer can return it as-is.

/// Catalog rule violations and their HTTP mapping.
pub mod catalog;
/// Configuration errors.
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, config::ConfigError},
};

/// Main error type for the catalog.
///
/// # Error Categories
/// - Catalog errors (uniqueness violations, dangling references, missing rows)
/// - Configuration errors (missing/invalid environment variables)
/// - Database errors (connection failures, migrations, unexpected query failures)
/// - Logging setup errors
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog operation rejected (uniqueness, reference, not found, duplicate favorite).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error not attributable to a catalog rule.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// A global tracing subscriber was already installed.
    #[error(transparent)]
    LoggingError(#[from] tracing_subscriber::util::TryInitError),
}

/// Converts catalog errors into their HTTP responses, everything else into a 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::CatalogError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
