mod create;
mod delete;
mod get;
mod update;

use super::*;

use crate::server::service::vehicle::VehicleService;
