use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000004_create_vehicle_table::Vehicle, m20251017_000005_create_user_table::User,
};

static IDX_FAVORITE_VEHICLES_VEHICLE_ID: &str = "idx_favorite_vehicles_vehicle_id";
static FK_FAVORITE_VEHICLES_USER_ID: &str = "fk_favorite_vehicles_user_id";
static FK_FAVORITE_VEHICLES_VEHICLE_ID: &str = "fk_favorite_vehicles_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteVehicles::Table)
                    .if_not_exists()
                    .col(integer(FavoriteVehicles::UserId))
                    .col(integer(FavoriteVehicles::VehicleId))
                    .primary_key(
                        Index::create()
                            .col(FavoriteVehicles::UserId)
                            .col(FavoriteVehicles::VehicleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_VEHICLES_USER_ID)
                            .from(FavoriteVehicles::Table, FavoriteVehicles::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_VEHICLES_VEHICLE_ID)
                            .from(FavoriteVehicles::Table, FavoriteVehicles::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // The composite primary key already covers lookups by user_id
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_VEHICLES_VEHICLE_ID)
                    .table(FavoriteVehicles::Table)
                    .col(FavoriteVehicles::VehicleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_VEHICLES_VEHICLE_ID)
                    .table(FavoriteVehicles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteVehicles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteVehicles {
    Table,
    UserId,
    VehicleId,
}
