use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        character::CharacterDto,
        favorite::FavoriteKind,
        planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    },
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository,
        },
        error::{
            catalog::{CatalogError, ConstraintViolationExt},
            Error,
        },
        model::kind::EntityKind,
        service::character::delete_characters,
    },
};

/// Service for managing planets.
///
/// Deleting a planet also deletes the characters native to it.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a planet.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The new planet with its assigned ID
    /// - `Err(CatalogError::UniquenessViolation)` - A planet with the name already exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let txn = self.db.begin().await?;

        let planet_repo = PlanetRepository::new(&txn);
        if planet_repo.get_by_name(&planet.name).await?.is_some() {
            return Err(name_taken(&planet.name).into());
        }

        let name = planet.name.clone();
        let planet = planet_repo
            .create(planet)
            .await
            .on_unique_violation(|| name_taken(&name))?;

        txn.commit().await?;

        Ok(planet.into())
    }

    /// Retrieves a planet by ID.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The planet
    /// - `Err(CatalogError::NotFound)` - No planet with the ID exists
    pub async fn get(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        match planet_repo.get_by_id(planet_id).await? {
            Some(planet) => Ok(planet.into()),
            None => Err(CatalogError::not_found(EntityKind::Planet, planet_id).into()),
        }
    }

    /// Retrieves a planet by its unique name.
    pub async fn get_by_name(&self, name: &str) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        match planet_repo.get_by_name(name).await? {
            Some(planet) => Ok(planet.into()),
            None => Err(CatalogError::not_found_by(EntityKind::Planet, "name", name).into()),
        }
    }

    /// Retrieves every planet ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves the characters native to a planet, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<CharacterDto>)` - The characters, empty if none reference the planet
    /// - `Err(CatalogError::NotFound)` - No planet with the ID exists
    pub async fn get_characters(&self, planet_id: i32) -> Result<Vec<CharacterDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);

        if planet_repo.get_by_id(planet_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::Planet, planet_id).into());
        }

        let characters = character_repo.get_many_by_planet_id(planet_id).await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Applies a partial update to a planet.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The updated planet
    /// - `Err(CatalogError::NotFound)` - No planet with the ID exists
    /// - `Err(CatalogError::UniquenessViolation)` - The new name belongs to another planet
    pub async fn update(
        &self,
        planet_id: i32,
        update: UpdatePlanetDto,
    ) -> Result<PlanetDto, Error> {
        let txn = self.db.begin().await?;

        let planet_repo = PlanetRepository::new(&txn);
        if planet_repo.get_by_id(planet_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::Planet, planet_id).into());
        }
        if let Some(name) = &update.name {
            if let Some(existing) = planet_repo.get_by_name(name).await? {
                if existing.id != planet_id {
                    return Err(name_taken(name).into());
                }
            }
        }

        let name = update.name.clone().unwrap_or_default();
        let planet = planet_repo
            .update(planet_id, update)
            .await
            .on_unique_violation(|| name_taken(&name))?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Planet, planet_id))?;

        txn.commit().await?;

        Ok(planet.into())
    }

    /// Deletes a planet, its characters and every favorite referencing either.
    ///
    /// All rows are removed in one transaction, dependents first.
    ///
    /// # Returns
    /// - `Ok(())` - The planet and its dependents were deleted
    /// - `Err(CatalogError::NotFound)` - No planet with the ID exists
    pub async fn delete(&self, planet_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let planet_repo = PlanetRepository::new(&txn);
        if planet_repo.get_by_id(planet_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::Planet, planet_id).into());
        }

        let character_ids = CharacterRepository::new(&txn)
            .get_ids_by_owner(Some(planet_id), None)
            .await?;
        delete_characters(&txn, &character_ids).await?;

        FavoriteRepository::new(&txn)
            .delete_many_by_target_ids(FavoriteKind::Planet, &[planet_id])
            .await?;
        planet_repo.delete(planet_id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Deleted planet ID {} with {} native characters",
            planet_id,
            character_ids.len()
        );

        Ok(())
    }
}

fn name_taken(name: &str) -> CatalogError {
    CatalogError::uniqueness_violation(EntityKind::Planet, "name", name)
}
