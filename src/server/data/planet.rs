use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::planet::{CreatePlanetDto, UpdatePlanetDto},
    server::model::db::PlanetModel,
};

/// Repository over the `planet` table.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, planet: CreatePlanetDto) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            climate: ActiveValue::Set(planet.climate),
            terrain: ActiveValue::Set(planet.terrain),
            population: ActiveValue::Set(planet.population),
            diameter: ActiveValue::Set(planet.diameter),
            rotation_period: ActiveValue::Set(planet.rotation_period),
            orbital_period: ActiveValue::Set(planet.orbital_period),
            gravity: ActiveValue::Set(planet.gravity),
            surface_water: ActiveValue::Set(planet.surface_water),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets a planet by ID
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets a planet by its unique name, compared exactly
    pub async fn get_by_name(&self, name: &str) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided changes to a planet
    ///
    /// Returns `Ok(None)` if the planet does not exist. Fields absent from the update are
    /// left untouched.
    pub async fn update(
        &self,
        planet_id: i32,
        update: UpdatePlanetDto,
    ) -> Result<Option<PlanetModel>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.clone().into_active_model();
        if let Some(name) = update.name {
            planet_am.name = ActiveValue::Set(name);
        }
        if let Some(climate) = update.climate {
            planet_am.climate = ActiveValue::Set(climate);
        }
        if let Some(terrain) = update.terrain {
            planet_am.terrain = ActiveValue::Set(terrain);
        }
        if let Some(population) = update.population {
            planet_am.population = ActiveValue::Set(population);
        }
        if let Some(diameter) = update.diameter {
            planet_am.diameter = ActiveValue::Set(diameter);
        }
        if let Some(rotation_period) = update.rotation_period {
            planet_am.rotation_period = ActiveValue::Set(rotation_period);
        }
        if let Some(orbital_period) = update.orbital_period {
            planet_am.orbital_period = ActiveValue::Set(orbital_period);
        }
        if let Some(gravity) = update.gravity {
            planet_am.gravity = ActiveValue::Set(gravity);
        }
        if let Some(surface_water) = update.surface_water {
            planet_am.surface_water = ActiveValue::Set(surface_water);
        }

        if !planet_am.is_changed() {
            return Ok(Some(planet));
        }

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of planet existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
