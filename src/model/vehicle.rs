use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{model::patch::nullable, server::model::db::VehicleModel};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i64>,
    /// Length in meters
    pub length: Option<f64>,
    pub max_atmosphering_speed: Option<i32>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    pub vehicle_class: Option<String>,
}

impl From<VehicleModel> for VehicleDto {
    fn from(vehicle: VehicleModel) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            manufacturer: vehicle.manufacturer,
            cost_in_credits: vehicle.cost_in_credits,
            length: vehicle.length,
            max_atmosphering_speed: vehicle.max_atmosphering_speed,
            crew: vehicle.crew,
            passengers: vehicle.passengers,
            cargo_capacity: vehicle.cargo_capacity,
            consumables: vehicle.consumables,
            vehicle_class: vehicle.vehicle_class,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateVehicleDto {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub length: Option<f64>,
    pub max_atmosphering_speed: Option<i32>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    pub vehicle_class: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateVehicleDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub model: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub manufacturer: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub cost_in_credits: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub length: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub max_atmosphering_speed: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub crew: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub passengers: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub cargo_capacity: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub consumables: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub vehicle_class: Option<Option<String>>,
}
