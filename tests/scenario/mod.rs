
use holocron::{
    model::{
        character::CreateCharacterDto, planet::CreatePlanetDto, species::CreateSpeciesDto,
        user::CreateUserDto, vehicle::CreateVehicleDto,
    },
    server::{error::catalog::CatalogError, service::planet::PlanetService},
};

use super::*;

fn new_user(email: &str) -> CreateUserDto {
    CreateUserDto {
        email: email.to_string(),
        password: "hunter2".to_string(),
        first_name: "Padme".to_string(),
        last_name: "Amidala".to_string(),
        is_active: None,
    }
}
