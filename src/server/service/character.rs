use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{
        character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
        favorite::FavoriteKind,
    },
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, species::SpeciesRepository,
        },
        error::{
            catalog::{CatalogError, ConstraintViolationExt},
            Error,
        },
        model::kind::EntityKind,
    },
};

/// Service for managing characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a character.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The new character with its assigned ID
    /// - `Err(CatalogError::UniquenessViolation)` - A character with the name already exists
    /// - `Err(CatalogError::ReferenceError)` - The referenced planet or species does not exist
    pub async fn create(&self, character: CreateCharacterDto) -> Result<CharacterDto, Error> {
        let txn = self.db.begin().await?;

        let character_repo = CharacterRepository::new(&txn);
        if character_repo.get_by_name(&character.name).await?.is_some() {
            return Err(name_taken(&character.name).into());
        }
        ensure_references_exist(&txn, character.planet_id, character.species_id).await?;

        let name = character.name.clone();
        let (planet_id, species_id) = (character.planet_id, character.species_id);
        let character = character_repo.create(character).await.on_constraint_violation(
            || name_taken(&name),
            || dangling_reference(planet_id, species_id),
        )?;

        txn.commit().await?;

        Ok(character.into())
    }

    /// Retrieves a character by ID, `NotFound` if it does not exist.
    pub async fn get(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        match character_repo.get_by_id(character_id).await? {
            Some(character) => Ok(character.into()),
            None => Err(CatalogError::not_found(EntityKind::Character, character_id).into()),
        }
    }

    /// Retrieves a character by exact name.
    pub async fn get_by_name(&self, name: &str) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        match character_repo.get_by_name(name).await? {
            Some(character) => Ok(character.into()),
            None => Err(CatalogError::not_found_by(EntityKind::Character, "name", name).into()),
        }
    }

    /// Lists every character, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let characters = character_repo.get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Applies a partial update to a character.
    ///
    /// Changed planet or species references must point at existing rows, clearing them
    /// with an explicit null is always allowed.
    pub async fn update(
        &self,
        character_id: i32,
        update: UpdateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        let txn = self.db.begin().await?;

        let character_repo = CharacterRepository::new(&txn);
        if character_repo.get_by_id(character_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::Character, character_id).into());
        }
        if let Some(name) = &update.name {
            if let Some(existing) = character_repo.get_by_name(name).await? {
                if existing.id != character_id {
                    return Err(name_taken(name).into());
                }
            }
        }
        let planet_id = update.planet_id.flatten();
        let species_id = update.species_id.flatten();
        ensure_references_exist(&txn, planet_id, species_id).await?;

        let name = update.name.clone().unwrap_or_default();
        let character = character_repo
            .update(character_id, update)
            .await
            .on_constraint_violation(
                || name_taken(&name),
                || dangling_reference(planet_id, species_id),
            )?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Character, character_id))?;

        txn.commit().await?;

        Ok(character.into())
    }

    /// Deletes a character along with the favorites referencing it.
    pub async fn delete(&self, character_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let character_repo = CharacterRepository::new(&txn);
        if character_repo.get_by_id(character_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::Character, character_id).into());
        }

        delete_characters(&txn, &[character_id]).await?;

        txn.commit().await?;

        Ok(())
    }
}

/// Deletes characters and every favorite row referencing them.
///
/// Shared by the planet and species cascades, runs on the caller's transaction.
///
/// # Returns
/// - `Ok(u64)` - Number of characters deleted
pub(super) async fn delete_characters<C: ConnectionTrait>(
    db: &C,
    character_ids: &[i32],
) -> Result<u64, DbErr> {
    if character_ids.is_empty() {
        return Ok(0);
    }

    let favorites = FavoriteRepository::new(db)
        .delete_many_by_target_ids(FavoriteKind::Character, character_ids)
        .await?;
    let characters = CharacterRepository::new(db)
        .delete_many_by_ids(character_ids)
        .await?;

    tracing::debug!(
        "Deleted {} characters and {} of their favorites",
        characters.rows_affected,
        favorites.rows_affected
    );

    Ok(characters.rows_affected)
}

async fn ensure_references_exist<C: ConnectionTrait>(
    db: &C,
    planet_id: Option<i32>,
    species_id: Option<i32>,
) -> Result<(), Error> {
    if let Some(planet_id) = planet_id {
        if PlanetRepository::new(db).get_by_id(planet_id).await?.is_none() {
            return Err(
                CatalogError::reference_error(EntityKind::Planet, "planet_id", planet_id).into(),
            );
        }
    }

    if let Some(species_id) = species_id {
        if SpeciesRepository::new(db).get_by_id(species_id).await?.is_none() {
            return Err(
                CatalogError::reference_error(EntityKind::Species, "species_id", species_id).into(),
            );
        }
    }

    Ok(())
}

fn name_taken(name: &str) -> CatalogError {
    CatalogError::uniqueness_violation(EntityKind::Character, "name", name)
}

// The constraint does not say which reference failed, report the planet when one was set.
fn dangling_reference(planet_id: Option<i32>, species_id: Option<i32>) -> CatalogError {
    match (planet_id, species_id) {
        (Some(planet_id), _) => {
            CatalogError::reference_error(EntityKind::Planet, "planet_id", planet_id)
        }
        (None, species_id) => CatalogError::reference_error(
            EntityKind::Species,
            "species_id",
            species_id.unwrap_or_default(),
        ),
    }
}
