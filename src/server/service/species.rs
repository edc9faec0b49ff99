use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        character::CharacterDto,
        species::{CreateSpeciesDto, SpeciesDto, UpdateSpeciesDto},
    },
    server::{
        data::{character::CharacterRepository, species::SpeciesRepository},
        error::{
            catalog::{CatalogError, ConstraintViolationExt},
            Error,
        },
        model::kind::EntityKind,
        service::character::delete_characters,
    },
};

/// Service for managing species.
///
/// Deleting a species also deletes every character of that species.
pub struct SpeciesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesService<'a> {
    /// Creates a new instance of [`SpeciesService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a species, failing with `UniquenessViolation` if the name is taken.
    pub async fn create(&self, species: CreateSpeciesDto) -> Result<SpeciesDto, Error> {
        let txn = self.db.begin().await?;

        let species_repo = SpeciesRepository::new(&txn);
        if species_repo.get_by_name(&species.name).await?.is_some() {
            return Err(name_taken(&species.name).into());
        }

        let name = species.name.clone();
        let species = species_repo
            .create(species)
            .await
            .on_unique_violation(|| name_taken(&name))?;

        txn.commit().await?;

        Ok(species.into())
    }

    /// Retrieves a species by ID, `NotFound` if it does not exist.
    pub async fn get(&self, species_id: i32) -> Result<SpeciesDto, Error> {
        let species_repo = SpeciesRepository::new(self.db);

        match species_repo.get_by_id(species_id).await? {
            Some(species) => Ok(species.into()),
            None => Err(CatalogError::not_found(EntityKind::Species, species_id).into()),
        }
    }

    /// Retrieves a species by exact name.
    pub async fn get_by_name(&self, name: &str) -> Result<SpeciesDto, Error> {
        let species_repo = SpeciesRepository::new(self.db);

        match species_repo.get_by_name(name).await? {
            Some(species) => Ok(species.into()),
            None => Err(CatalogError::not_found_by(EntityKind::Species, "name", name).into()),
        }
    }

    /// Lists every species, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<SpeciesDto>, Error> {
        let species_repo = SpeciesRepository::new(self.db);

        let species = species_repo.get_all().await?;

        Ok(species.into_iter().map(SpeciesDto::from).collect())
    }

    /// Retrieves the characters of a species, ordered by ID.
    pub async fn get_characters(&self, species_id: i32) -> Result<Vec<CharacterDto>, Error> {
        let species_repo = SpeciesRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);

        if species_repo.get_by_id(species_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::Species, species_id).into());
        }

        let characters = character_repo.get_many_by_species_id(species_id).await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Applies a partial update to a species.
    ///
    /// # Returns
    /// - `Ok(SpeciesDto)` - The species after the update
    /// - `Err(CatalogError::NotFound)` - No species with the ID exists
    /// - `Err(CatalogError::UniquenessViolation)` - The new name belongs to another species
    pub async fn update(
        &self,
        species_id: i32,
        update: UpdateSpeciesDto,
    ) -> Result<SpeciesDto, Error> {
        let txn = self.db.begin().await?;

        let species_repo = SpeciesRepository::new(&txn);
        if species_repo.get_by_id(species_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::Species, species_id).into());
        }
        if let Some(name) = &update.name {
            if let Some(existing) = species_repo.get_by_name(name).await? {
                if existing.id != species_id {
                    return Err(name_taken(name).into());
                }
            }
        }

        let name = update.name.clone().unwrap_or_default();
        let species = species_repo
            .update(species_id, update)
            .await
            .on_unique_violation(|| name_taken(&name))?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Species, species_id))?;

        txn.commit().await?;

        Ok(species.into())
    }

    /// Deletes a species together with its characters and their favorites.
    pub async fn delete(&self, species_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let species_repo = SpeciesRepository::new(&txn);
        if species_repo.get_by_id(species_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::Species, species_id).into());
        }

        let character_ids = CharacterRepository::new(&txn)
            .get_ids_by_owner(None, Some(species_id))
            .await?;
        delete_characters(&txn, &character_ids).await?;

        species_repo.delete(species_id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Deleted species ID {} with {} characters",
            species_id,
            character_ids.len()
        );

        Ok(())
    }
}

fn name_taken(name: &str) -> CatalogError {
    CatalogError::uniqueness_violation(EntityKind::Species, "name", name)
}
