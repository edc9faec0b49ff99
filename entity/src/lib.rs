//! Catalog database entities.
//!
//! One module per table. Characters reference their home planet and species through
//! nullable foreign keys; favorites are pure join tables keyed by `(user_id, target_id)`.

pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod favorite_vehicle;
pub mod planet;
pub mod species;
pub mod user;
pub mod vehicle;
