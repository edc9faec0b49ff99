use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{model::patch::nullable, server::model::db::CharacterModel};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    /// ID of the character's home planet
    pub planet_id: Option<i32>,
    pub species_id: Option<i32>,
}

impl From<CharacterModel> for CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name,
            birth_year: character.birth_year,
            gender: character.gender,
            height: character.height,
            mass: character.mass,
            hair_color: character.hair_color,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
            planet_id: character.planet_id,
            species_id: character.species_id,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub planet_id: Option<i32>,
    pub species_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateCharacterDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub birth_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub height: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub mass: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub hair_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub skin_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub eye_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub planet_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub species_id: Option<Option<i32>>,
}
