use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterModel, PlanetModel, SpeciesModel, VehicleModel},
    TestSetup,
};

impl TestSetup {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_species(&self, name: &str) -> Result<SpeciesModel, TestError> {
        Ok(
            entity::prelude::Species::insert(entity::species::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_character(
        &self,
        name: &str,
        planet_id: Option<i32>,
        species_id: Option<i32>,
    ) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                planet_id: ActiveValue::Set(planet_id),
                species_id: ActiveValue::Set(species_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_vehicle(&self, name: &str) -> Result<VehicleModel, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a planet with a native character, returning both.
    pub async fn insert_planet_with_character(
        &self,
        planet_name: &str,
        character_name: &str,
    ) -> Result<(PlanetModel, CharacterModel), TestError> {
        let planet_model = self.insert_planet(planet_name).await?;
        let character_model = self
            .insert_character(character_name, Some(planet_model.id), None)
            .await?;

        Ok((planet_model, character_model))
    }
}
