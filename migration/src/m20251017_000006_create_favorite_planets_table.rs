use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000002_create_planet_table::Planet, m20251017_000005_create_user_table::User,
};

static IDX_FAVORITE_PLANETS_PLANET_ID: &str = "idx_favorite_planets_planet_id";
static FK_FAVORITE_PLANETS_USER_ID: &str = "fk_favorite_planets_user_id";
static FK_FAVORITE_PLANETS_PLANET_ID: &str = "fk_favorite_planets_planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(integer(FavoritePlanets::UserId))
                    .col(integer(FavoritePlanets::PlanetId))
                    .primary_key(
                        Index::create()
                            .col(FavoritePlanets::UserId)
                            .col(FavoritePlanets::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANETS_USER_ID)
                            .from(FavoritePlanets::Table, FavoritePlanets::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANETS_PLANET_ID)
                            .from(FavoritePlanets::Table, FavoritePlanets::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // The composite primary key already covers lookups by user_id
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_PLANETS_PLANET_ID)
                    .table(FavoritePlanets::Table)
                    .col(FavoritePlanets::PlanetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_PLANETS_PLANET_ID)
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritePlanets {
    Table,
    UserId,
    PlanetId,
}
