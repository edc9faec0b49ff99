use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto, vehicle::VehicleDto};

/// The kinds of catalog entries a user can mark as a favorite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Planet,
    Character,
    Vehicle,
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planet => write!(f, "planet"),
            Self::Character => write!(f, "character"),
            Self::Vehicle => write!(f, "vehicle"),
        }
    }
}

/// A favorited catalog entry, serialized as the entry itself.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum FavoriteDto {
    Planet(PlanetDto),
    Character(CharacterDto),
    Vehicle(VehicleDto),
}

impl From<PlanetDto> for FavoriteDto {
    fn from(planet: PlanetDto) -> Self {
        Self::Planet(planet)
    }
}

impl From<CharacterDto> for FavoriteDto {
    fn from(character: CharacterDto) -> Self {
        Self::Character(character)
    }
}

impl From<VehicleDto> for FavoriteDto {
    fn from(vehicle: VehicleDto) -> Self {
        Self::Vehicle(vehicle)
    }
}
