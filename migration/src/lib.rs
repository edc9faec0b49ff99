pub use sea_orm_migration::prelude::*;

mod m20251017_000001_create_species_table;
mod m20251017_000002_create_planet_table;
mod m20251017_000003_create_character_table;
mod m20251017_000004_create_vehicle_table;
mod m20251017_000005_create_user_table;
mod m20251017_000006_create_favorite_planets_table;
mod m20251017_000007_create_favorite_characters_table;
mod m20251017_000008_create_favorite_vehicles_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_create_species_table::Migration),
            Box::new(m20251017_000002_create_planet_table::Migration),
            Box::new(m20251017_000003_create_character_table::Migration),
            Box::new(m20251017_000004_create_vehicle_table::Migration),
            Box::new(m20251017_000005_create_user_table::Migration),
            Box::new(m20251017_000006_create_favorite_planets_table::Migration),
            Box::new(m20251017_000007_create_favorite_characters_table::Migration),
            Box::new(m20251017_000008_create_favorite_vehicles_table::Migration),
        ]
    }
}
