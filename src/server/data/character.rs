use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::character::{CreateCharacterDto, UpdateCharacterDto},
    server::model::db::CharacterModel,
};

/// Repository over the `character` table.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// The planet and species references are not checked here, a dangling reference
    /// fails on the foreign key constraint.
    pub async fn create(&self, character: CreateCharacterDto) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            birth_year: ActiveValue::Set(character.birth_year),
            gender: ActiveValue::Set(character.gender),
            height: ActiveValue::Set(character.height),
            mass: ActiveValue::Set(character.mass),
            hair_color: ActiveValue::Set(character.hair_color),
            skin_color: ActiveValue::Set(character.skin_color),
            eye_color: ActiveValue::Set(character.eye_color),
            planet_id: ActiveValue::Set(character.planet_id),
            species_id: ActiveValue::Set(character.species_id),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets a character by ID
    pub async fn get_by_id(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets a character by its unique name, compared exactly
    pub async fn get_by_name(&self, name: &str) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets every character, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the characters native to a planet, ordered by ID
    pub async fn get_many_by_planet_id(
        &self,
        planet_id: i32,
    ) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::PlanetId.eq(planet_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the characters of a species, ordered by ID
    pub async fn get_many_by_species_id(
        &self,
        species_id: i32,
    ) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::SpeciesId.eq(species_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the IDs of characters referencing the planet or species
    ///
    /// Either filter may be omitted, a character matches when it references any of the
    /// provided rows.
    pub async fn get_ids_by_owner(
        &self,
        planet_id: Option<i32>,
        species_id: Option<i32>,
    ) -> Result<Vec<i32>, DbErr> {
        if planet_id.is_none() && species_id.is_none() {
            return Ok(Vec::new());
        }

        let mut condition = Condition::any();
        if let Some(planet_id) = planet_id {
            condition = condition.add(entity::character::Column::PlanetId.eq(planet_id));
        }
        if let Some(species_id) = species_id {
            condition = condition.add(entity::character::Column::SpeciesId.eq(species_id));
        }

        entity::prelude::Character::find()
            .select_only()
            .column(entity::character::Column::Id)
            .filter(condition)
            .order_by_asc(entity::character::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Applies the provided changes to a character, `Ok(None)` if it does not exist
    pub async fn update(
        &self,
        character_id: i32,
        update: UpdateCharacterDto,
    ) -> Result<Option<CharacterModel>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.clone().into_active_model();
        if let Some(name) = update.name {
            character_am.name = ActiveValue::Set(name);
        }
        if let Some(birth_year) = update.birth_year {
            character_am.birth_year = ActiveValue::Set(birth_year);
        }
        if let Some(gender) = update.gender {
            character_am.gender = ActiveValue::Set(gender);
        }
        if let Some(height) = update.height {
            character_am.height = ActiveValue::Set(height);
        }
        if let Some(mass) = update.mass {
            character_am.mass = ActiveValue::Set(mass);
        }
        if let Some(hair_color) = update.hair_color {
            character_am.hair_color = ActiveValue::Set(hair_color);
        }
        if let Some(skin_color) = update.skin_color {
            character_am.skin_color = ActiveValue::Set(skin_color);
        }
        if let Some(eye_color) = update.eye_color {
            character_am.eye_color = ActiveValue::Set(eye_color);
        }
        if let Some(planet_id) = update.planet_id {
            character_am.planet_id = ActiveValue::Set(planet_id);
        }
        if let Some(species_id) = update.species_id {
            character_am.species_id = ActiveValue::Set(species_id);
        }

        if !character_am.is_changed() {
            return Ok(Some(character));
        }

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes every character with one of the provided IDs
    pub async fn delete_many_by_ids(&self, character_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_many()
            .filter(entity::character::Column::Id.is_in(character_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
