//! Data access layer repositories.
//!
//! One repository per catalog table, plus [`favorite::FavoriteRepository`] covering the
//! three favorite join tables. Repositories are generic over [`sea_orm::ConnectionTrait`]
//! so services can run them against a transaction. They report missing rows as `None`
//! or zero affected rows and leave the mapping to catalog errors to the services.

/// Repository for the `character` table.
pub mod character;
/// Repository for the favorite join tables.
pub mod favorite;
/// Repository for the `planet` table.
pub mod planet;
/// Repository for the `species` table.
pub mod species;
/// Repository for the `user` table.
pub mod user;
/// Repository for the `vehicle` table.
pub mod vehicle;
