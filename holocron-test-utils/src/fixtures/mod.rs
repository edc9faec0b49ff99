//! Test fixture modules for database row creation.
//!
//! - `catalog` - Planets, species, characters and vehicles
//! - `user` - User accounts
//! - `favorite` - Favorite associations between users and catalog entries
//! - `factory` - Unsaved models for tests that never touch the database

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
