use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_create_species_table::Species, m20251017_000002_create_planet_table::Planet,
};

static IDX_CHARACTER_PLANET_ID: &str = "idx_character_planet_id";
static IDX_CHARACTER_SPECIES_ID: &str = "idx_character_species_id";
static FK_CHARACTER_PLANET_ID: &str = "fk_character_planet_id";
static FK_CHARACTER_SPECIES_ID: &str = "fk_character_species_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline as SQLite cannot add them to an existing table.
        // Neither cascades, planet & species deletion removes characters explicitly.
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len_uniq(Character::Name, 100))
                    .col(string_len_null(Character::BirthYear, 20))
                    .col(string_len_null(Character::Gender, 20))
                    .col(integer_null(Character::Height))
                    .col(integer_null(Character::Mass))
                    .col(string_len_null(Character::HairColor, 50))
                    .col(string_len_null(Character::SkinColor, 50))
                    .col(string_len_null(Character::EyeColor, 50))
                    .col(integer_null(Character::PlanetId))
                    .col(integer_null(Character::SpeciesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_PLANET_ID)
                            .from(Character::Table, Character::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_SPECIES_ID)
                            .from(Character::Table, Character::SpeciesId)
                            .to(Species::Table, Species::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_PLANET_ID)
                    .table(Character::Table)
                    .col(Character::PlanetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_SPECIES_ID)
                    .table(Character::Table)
                    .col(Character::SpeciesId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_SPECIES_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_PLANET_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    BirthYear,
    Gender,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    PlanetId,
    SpeciesId,
}
