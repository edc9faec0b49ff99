use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto},
    server::model::db::VehicleModel,
};

/// Repository over the `vehicle` table.
pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new vehicle
    pub async fn create(&self, vehicle: CreateVehicleDto) -> Result<VehicleModel, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(vehicle.name),
            model: ActiveValue::Set(vehicle.model),
            manufacturer: ActiveValue::Set(vehicle.manufacturer),
            cost_in_credits: ActiveValue::Set(vehicle.cost_in_credits),
            length: ActiveValue::Set(vehicle.length),
            max_atmosphering_speed: ActiveValue::Set(vehicle.max_atmosphering_speed),
            crew: ActiveValue::Set(vehicle.crew),
            passengers: ActiveValue::Set(vehicle.passengers),
            cargo_capacity: ActiveValue::Set(vehicle.cargo_capacity),
            consumables: ActiveValue::Set(vehicle.consumables),
            vehicle_class: ActiveValue::Set(vehicle.vehicle_class),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    /// Gets a vehicle by ID
    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }

    /// Gets a vehicle by its unique name, compared exactly
    pub async fn get_by_name(&self, name: &str) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets every vehicle, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided changes to a vehicle, `Ok(None)` if it does not exist
    pub async fn update(
        &self,
        vehicle_id: i32,
        update: UpdateVehicleDto,
    ) -> Result<Option<VehicleModel>, DbErr> {
        let vehicle = match entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?
        {
            Some(vehicle) => vehicle,
            None => return Ok(None),
        };

        let mut vehicle_am = vehicle.clone().into_active_model();
        if let Some(name) = update.name {
            vehicle_am.name = ActiveValue::Set(name);
        }
        if let Some(model) = update.model {
            vehicle_am.model = ActiveValue::Set(model);
        }
        if let Some(manufacturer) = update.manufacturer {
            vehicle_am.manufacturer = ActiveValue::Set(manufacturer);
        }
        if let Some(cost_in_credits) = update.cost_in_credits {
            vehicle_am.cost_in_credits = ActiveValue::Set(cost_in_credits);
        }
        if let Some(length) = update.length {
            vehicle_am.length = ActiveValue::Set(length);
        }
        if let Some(max_atmosphering_speed) = update.max_atmosphering_speed {
            vehicle_am.max_atmosphering_speed = ActiveValue::Set(max_atmosphering_speed);
        }
        if let Some(crew) = update.crew {
            vehicle_am.crew = ActiveValue::Set(crew);
        }
        if let Some(passengers) = update.passengers {
            vehicle_am.passengers = ActiveValue::Set(passengers);
        }
        if let Some(cargo_capacity) = update.cargo_capacity {
            vehicle_am.cargo_capacity = ActiveValue::Set(cargo_capacity);
        }
        if let Some(consumables) = update.consumables {
            vehicle_am.consumables = ActiveValue::Set(consumables);
        }
        if let Some(vehicle_class) = update.vehicle_class {
            vehicle_am.vehicle_class = ActiveValue::Set(vehicle_class);
        }

        if !vehicle_am.is_changed() {
            return Ok(Some(vehicle));
        }

        let vehicle = vehicle_am.update(self.db).await?;

        Ok(Some(vehicle))
    }

    /// Deletes a vehicle
    ///
    /// Returns OK regardless of vehicle existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await
    }
}
