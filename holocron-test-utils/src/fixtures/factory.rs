use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{CharacterModel, PlanetModel, SpeciesModel, UserModel, VehicleModel};

/// Fixed subscription date used by mock users, 2025-05-04 00:00:00.
pub fn mock_subscription_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 4)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Create a mock active user with the provided ID and email.
pub fn mock_user_model(id: i32, email: &str) -> UserModel {
    UserModel {
        id,
        email: email.to_string(),
        password: "password".to_string(),
        first_name: "Luke".to_string(),
        last_name: "Skywalker".to_string(),
        subscription_date: mock_subscription_date(),
        is_active: true,
    }
}

/// Create a mock planet with only the required fields set.
pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        climate: None,
        terrain: None,
        population: None,
        diameter: None,
        rotation_period: None,
        orbital_period: None,
        gravity: None,
        surface_water: None,
    }
}

/// Create a mock species with only the required fields set.
pub fn mock_species_model(id: i32, name: &str) -> SpeciesModel {
    SpeciesModel {
        id,
        name: name.to_string(),
        classification: None,
        designation: None,
        average_height: None,
        average_lifespan: None,
        hair_colors: None,
        skin_colors: None,
        eye_colors: None,
        language: None,
    }
}

/// Create a mock character belonging to the provided planet and species.
pub fn mock_character_model(
    id: i32,
    name: &str,
    planet_id: Option<i32>,
    species_id: Option<i32>,
) -> CharacterModel {
    CharacterModel {
        id,
        name: name.to_string(),
        birth_year: None,
        gender: None,
        height: None,
        mass: None,
        hair_color: None,
        skin_color: None,
        eye_color: None,
        planet_id,
        species_id,
    }
}

/// Create a mock vehicle with only the required fields set.
pub fn mock_vehicle_model(id: i32, name: &str) -> VehicleModel {
    VehicleModel {
        id,
        name: name.to_string(),
        model: None,
        manufacturer: None,
        cost_in_credits: None,
        length: None,
        max_atmosphering_speed: None,
        crew: None,
        passengers: None,
        cargo_capacity: None,
        consumables: None,
        vehicle_class: None,
    }
}
