use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        favorite::FavoriteKind,
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    },
    server::{
        data::{favorite::FavoriteRepository, vehicle::VehicleRepository},
        error::{
            catalog::{CatalogError, ConstraintViolationExt},
            Error,
        },
        model::kind::EntityKind,
    },
};

/// Service for managing vehicles.
pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    /// Creates a new instance of [`VehicleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a vehicle, failing with `UniquenessViolation` if the name is taken.
    pub async fn create(&self, vehicle: CreateVehicleDto) -> Result<VehicleDto, Error> {
        let txn = self.db.begin().await?;

        let vehicle_repo = VehicleRepository::new(&txn);
        if vehicle_repo.get_by_name(&vehicle.name).await?.is_some() {
            return Err(name_taken(&vehicle.name).into());
        }

        let name = vehicle.name.clone();
        let vehicle = vehicle_repo
            .create(vehicle)
            .await
            .on_unique_violation(|| name_taken(&name))?;

        txn.commit().await?;

        Ok(vehicle.into())
    }

    /// Retrieves a vehicle by ID, `NotFound` if it does not exist.
    pub async fn get(&self, vehicle_id: i32) -> Result<VehicleDto, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        match vehicle_repo.get_by_id(vehicle_id).await? {
            Some(vehicle) => Ok(vehicle.into()),
            None => Err(CatalogError::not_found(EntityKind::Vehicle, vehicle_id).into()),
        }
    }

    /// Retrieves a vehicle by exact name.
    pub async fn get_by_name(&self, name: &str) -> Result<VehicleDto, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        match vehicle_repo.get_by_name(name).await? {
            Some(vehicle) => Ok(vehicle.into()),
            None => Err(CatalogError::not_found_by(EntityKind::Vehicle, "name", name).into()),
        }
    }

    /// Lists every vehicle, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let vehicles = vehicle_repo.get_all().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    /// Applies a partial update to a vehicle.
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - The vehicle after the update
    /// - `Err(CatalogError::NotFound)` - No vehicle with the ID exists
    /// - `Err(CatalogError::UniquenessViolation)` - The new name belongs to another vehicle
    pub async fn update(
        &self,
        vehicle_id: i32,
        update: UpdateVehicleDto,
    ) -> Result<VehicleDto, Error> {
        let txn = self.db.begin().await?;

        let vehicle_repo = VehicleRepository::new(&txn);
        if vehicle_repo.get_by_id(vehicle_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::Vehicle, vehicle_id).into());
        }
        if let Some(name) = &update.name {
            if let Some(existing) = vehicle_repo.get_by_name(name).await? {
                if existing.id != vehicle_id {
                    return Err(name_taken(name).into());
                }
            }
        }

        let name = update.name.clone().unwrap_or_default();
        let vehicle = vehicle_repo
            .update(vehicle_id, update)
            .await
            .on_unique_violation(|| name_taken(&name))?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Vehicle, vehicle_id))?;

        txn.commit().await?;

        Ok(vehicle.into())
    }

    /// Deletes a vehicle and the favorites referencing it.
    pub async fn delete(&self, vehicle_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let vehicle_repo = VehicleRepository::new(&txn);
        if vehicle_repo.get_by_id(vehicle_id).await?.is_none() {
            return Err(CatalogError::not_found(EntityKind::Vehicle, vehicle_id).into());
        }

        FavoriteRepository::new(&txn)
            .delete_many_by_target_ids(FavoriteKind::Vehicle, &[vehicle_id])
            .await?;
        vehicle_repo.delete(vehicle_id).await?;

        txn.commit().await?;

        Ok(())
    }
}

fn name_taken(name: &str) -> CatalogError {
    CatalogError::uniqueness_violation(EntityKind::Vehicle, "name", name)
}
