//! Data transfer objects.
//!
//! External representation of the catalog as handed to the web layer. Output DTOs are
//! built from database models and never carry credentials. Create DTOs hold the required
//! fields plus any optional ones, update DTOs hold only the fields to change.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod species;
pub mod user;
pub mod vehicle;

mod patch;
