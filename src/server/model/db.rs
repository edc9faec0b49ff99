//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login email
/// - `password` - Opaque credential, never serialized
/// - `first_name` / `last_name` - Display name
/// - `subscription_date` - Timestamp the user signed up (UTC)
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the character database model.
///
/// `planet_id` and `species_id` are nullable references to the owning planet and species.
pub type CharacterModel = entity::character::Model;

/// Type alias for the vehicle database model.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for the species database model.
pub type SpeciesModel = entity::species::Model;
