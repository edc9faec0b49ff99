use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::species::{CreateSpeciesDto, UpdateSpeciesDto},
    server::model::db::SpeciesModel,
};

/// Repository over the `species` table.
pub struct SpeciesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpeciesRepository<'a, C> {
    /// Creates a new instance of [`SpeciesRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new species
    pub async fn create(&self, species: CreateSpeciesDto) -> Result<SpeciesModel, DbErr> {
        let species = entity::species::ActiveModel {
            name: ActiveValue::Set(species.name),
            classification: ActiveValue::Set(species.classification),
            designation: ActiveValue::Set(species.designation),
            average_height: ActiveValue::Set(species.average_height),
            average_lifespan: ActiveValue::Set(species.average_lifespan),
            hair_colors: ActiveValue::Set(species.hair_colors),
            skin_colors: ActiveValue::Set(species.skin_colors),
            eye_colors: ActiveValue::Set(species.eye_colors),
            language: ActiveValue::Set(species.language),
            ..Default::default()
        };

        species.insert(self.db).await
    }

    /// Gets a species by ID
    pub async fn get_by_id(&self, species_id: i32) -> Result<Option<SpeciesModel>, DbErr> {
        entity::prelude::Species::find_by_id(species_id)
            .one(self.db)
            .await
    }

    /// Gets a species by its unique name, compared exactly
    pub async fn get_by_name(&self, name: &str) -> Result<Option<SpeciesModel>, DbErr> {
        entity::prelude::Species::find()
            .filter(entity::species::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets every species, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<SpeciesModel>, DbErr> {
        entity::prelude::Species::find()
            .order_by_asc(entity::species::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided changes to a species, `Ok(None)` if it does not exist
    pub async fn update(
        &self,
        species_id: i32,
        update: UpdateSpeciesDto,
    ) -> Result<Option<SpeciesModel>, DbErr> {
        let species = match entity::prelude::Species::find_by_id(species_id)
            .one(self.db)
            .await?
        {
            Some(species) => species,
            None => return Ok(None),
        };

        let mut species_am = species.clone().into_active_model();
        if let Some(name) = update.name {
            species_am.name = ActiveValue::Set(name);
        }
        if let Some(classification) = update.classification {
            species_am.classification = ActiveValue::Set(classification);
        }
        if let Some(designation) = update.designation {
            species_am.designation = ActiveValue::Set(designation);
        }
        if let Some(average_height) = update.average_height {
            species_am.average_height = ActiveValue::Set(average_height);
        }
        if let Some(average_lifespan) = update.average_lifespan {
            species_am.average_lifespan = ActiveValue::Set(average_lifespan);
        }
        if let Some(hair_colors) = update.hair_colors {
            species_am.hair_colors = ActiveValue::Set(hair_colors);
        }
        if let Some(skin_colors) = update.skin_colors {
            species_am.skin_colors = ActiveValue::Set(skin_colors);
        }
        if let Some(eye_colors) = update.eye_colors {
            species_am.eye_colors = ActiveValue::Set(eye_colors);
        }
        if let Some(language) = update.language {
            species_am.language = ActiveValue::Set(language);
        }

        if !species_am.is_changed() {
            return Ok(Some(species));
        }

        let species = species_am.update(self.db).await?;

        Ok(Some(species))
    }

    /// Deletes a species
    ///
    /// Returns OK regardless of species existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, species_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Species::delete_by_id(species_id)
            .exec(self.db)
            .await
    }
}
