//! Service layer for catalog operations.
//!
//! One service per entity plus [`favorite::FavoriteService`]. Services turn missing rows
//! and constraint violations into [`CatalogError`](crate::server::error::catalog::CatalogError)s
//! and run every write inside a single transaction, so a failed operation never leaves a
//! partial mutation behind. Reads go straight to the connection.

/// Character operations.
pub mod character;
/// Adding, removing and listing favorites.
pub mod favorite;
/// Planet operations, including the character cascade.
pub mod planet;
/// Species operations, including the character cascade.
pub mod species;
/// User operations.
pub mod user;
/// Vehicle operations.
pub mod vehicle;

#[cfg(test)]
mod tests;
