use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{model::patch::nullable, server::model::db::PlanetModel};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub surface_water: Option<i32>,
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            gravity: planet.gravity,
            surface_water: planet.surface_water,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreatePlanetDto {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub surface_water: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdatePlanetDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub climate: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub terrain: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub population: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub diameter: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub rotation_period: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub orbital_period: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub gravity: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub surface_water: Option<Option<i32>>,
}
