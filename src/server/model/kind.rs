use std::fmt;

use crate::model::favorite::FavoriteKind;

/// Identifies the kind of catalog row an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// A user account
    User,
    /// A planet
    Planet,
    /// A character
    Character,
    /// A vehicle
    Vehicle,
    /// A species
    Species,
    /// A favorite association between a user and a catalog entry
    Favorite(FavoriteKind),
}

impl From<FavoriteKind> for EntityKind {
    fn from(kind: FavoriteKind) -> Self {
        match kind {
            FavoriteKind::Planet => Self::Planet,
            FavoriteKind::Character => Self::Character,
            FavoriteKind::Vehicle => Self::Vehicle,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Planet => write!(f, "Planet"),
            Self::Character => write!(f, "Character"),
            Self::Vehicle => write!(f, "Vehicle"),
            Self::Species => write!(f, "Species"),
            Self::Favorite(kind) => write!(f, "Favorite {}", kind),
        }
    }
}
