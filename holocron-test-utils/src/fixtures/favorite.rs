use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoriteCharacterModel, FavoritePlanetModel, FavoriteVehicleModel},
    TestSetup,
};

impl TestSetup {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

/// Inserts favorite association rows.
///
/// Join rows carry no generated columns, so the returned models are built from the
/// inserted keys.
pub struct FavoriteFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        entity::prelude::FavoritePlanet::insert(entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(FavoritePlanetModel { user_id, planet_id })
    }

    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        entity::prelude::FavoriteCharacter::insert(entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(FavoriteCharacterModel {
            user_id,
            character_id,
        })
    }

    pub async fn insert_favorite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<FavoriteVehicleModel, TestError> {
        entity::prelude::FavoriteVehicle::insert(entity::favorite_vehicle::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(FavoriteVehicleModel {
            user_id,
            vehicle_id,
        })
    }
}
