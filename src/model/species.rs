use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{model::patch::nullable, server::model::db::SpeciesModel};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SpeciesDto {
    pub id: i32,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub average_lifespan: Option<i32>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub eye_colors: Option<String>,
    pub language: Option<String>,
}

impl From<SpeciesModel> for SpeciesDto {
    fn from(species: SpeciesModel) -> Self {
        Self {
            id: species.id,
            name: species.name,
            classification: species.classification,
            designation: species.designation,
            average_height: species.average_height,
            average_lifespan: species.average_lifespan,
            hair_colors: species.hair_colors,
            skin_colors: species.skin_colors,
            eye_colors: species.eye_colors,
            language: species.language,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateSpeciesDto {
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub average_lifespan: Option<i32>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub eye_colors: Option<String>,
    pub language: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateSpeciesDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub classification: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub designation: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub average_height: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub average_lifespan: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub hair_colors: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub skin_colors: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub eye_colors: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub language: Option<Option<String>>,
}
