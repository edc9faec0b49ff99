use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{
        character::CharacterDto,
        favorite::{FavoriteDto, FavoriteKind},
        planet::PlanetDto,
        user::UserDto,
        vehicle::VehicleDto,
    },
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository, vehicle::VehicleRepository,
        },
        error::{
            catalog::{CatalogError, ConstraintViolationExt},
            Error,
        },
        model::kind::EntityKind,
    },
};

/// Service for managing the favorites users keep of planets, characters and vehicles.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks the target as a favorite of the user.
    ///
    /// # Returns
    /// - `Ok(())` - The association was recorded
    /// - `Err(CatalogError::ReferenceError)` - The user or the target does not exist
    /// - `Err(CatalogError::AlreadyExists)` - The user already favorited the target
    pub async fn add(&self, user_id: i32, kind: FavoriteKind, target_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(CatalogError::reference_error(EntityKind::User, "user_id", user_id).into());
        }
        if !target_exists(&txn, kind, target_id).await? {
            return Err(missing_target(kind, target_id).into());
        }

        let favorite_repo = FavoriteRepository::new(&txn);
        if favorite_repo.exists(kind, user_id, target_id).await? {
            return Err(CatalogError::AlreadyExists {
                kind,
                user_id,
                target_id,
            }
            .into());
        }

        favorite_repo
            .create(kind, user_id, target_id)
            .await
            .on_constraint_violation(
                || CatalogError::AlreadyExists {
                    kind,
                    user_id,
                    target_id,
                },
                || missing_target(kind, target_id),
            )?;

        txn.commit().await?;

        tracing::debug!("User ID {} favorited {} ID {}", user_id, kind, target_id);

        Ok(())
    }

    /// Removes the target from the user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - The association was removed
    /// - `Err(CatalogError::NotFound)` - The user had not favorited the target
    pub async fn remove(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let delete_result = FavoriteRepository::new(&txn)
            .delete(kind, user_id, target_id)
            .await?;
        if delete_result.rows_affected == 0 {
            return Err(CatalogError::favorite_not_found(kind, user_id, target_id).into());
        }

        txn.commit().await?;

        tracing::debug!("User ID {} unfavorited {} ID {}", user_id, kind, target_id);

        Ok(())
    }

    /// Lists the user's favorites of one kind, ordered by target ID.
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - The favorited entries, empty if there are none
    /// - `Err(CatalogError::NotFound)` - No user with the ID exists
    pub async fn list(&self, user_id: i32, kind: FavoriteKind) -> Result<Vec<FavoriteDto>, Error> {
        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::User, user_id).into());
        }

        let favorite_repo = FavoriteRepository::new(self.db);
        let favorites: Vec<FavoriteDto> = match kind {
            FavoriteKind::Planet => favorite_repo
                .get_planets_by_user_id(user_id)
                .await?
                .into_iter()
                .map(|planet| PlanetDto::from(planet).into())
                .collect(),
            FavoriteKind::Character => favorite_repo
                .get_characters_by_user_id(user_id)
                .await?
                .into_iter()
                .map(|character| CharacterDto::from(character).into())
                .collect(),
            FavoriteKind::Vehicle => favorite_repo
                .get_vehicles_by_user_id(user_id)
                .await?
                .into_iter()
                .map(|vehicle| VehicleDto::from(vehicle).into())
                .collect(),
        };

        Ok(favorites)
    }

    /// Lists the users who favorited the target, ordered by user ID.
    ///
    /// # Returns
    /// - `Ok(Vec<UserDto>)` - The fans, empty if there are none
    /// - `Err(CatalogError::NotFound)` - The target does not exist
    pub async fn list_fans(
        &self,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<Vec<UserDto>, Error> {
        if !target_exists(self.db, kind, target_id).await? {
            return Err(CatalogError::not_found(kind.into(), target_id).into());
        }

        let fans = FavoriteRepository::new(self.db)
            .get_fans(kind, target_id)
            .await?;

        Ok(fans.into_iter().map(UserDto::from).collect())
    }
}

async fn target_exists<C: ConnectionTrait>(
    db: &C,
    kind: FavoriteKind,
    target_id: i32,
) -> Result<bool, DbErr> {
    let exists = match kind {
        FavoriteKind::Planet => PlanetRepository::new(db)
            .get_by_id(target_id)
            .await?
            .is_some(),
        FavoriteKind::Character => CharacterRepository::new(db)
            .get_by_id(target_id)
            .await?
            .is_some(),
        FavoriteKind::Vehicle => VehicleRepository::new(db)
            .get_by_id(target_id)
            .await?
            .is_some(),
    };

    Ok(exists)
}

fn missing_target(kind: FavoriteKind, target_id: i32) -> CatalogError {
    let field = match kind {
        FavoriteKind::Planet => "planet_id",
        FavoriteKind::Character => "character_id",
        FavoriteKind::Vehicle => "vehicle_id",
    };

    CatalogError::reference_error(kind.into(), field, target_id)
}
