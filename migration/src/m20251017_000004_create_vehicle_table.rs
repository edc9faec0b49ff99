use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len_uniq(Vehicle::Name, 100))
                    .col(string_len_null(Vehicle::Model, 100))
                    .col(string_len_null(Vehicle::Manufacturer, 100))
                    .col(big_integer_null(Vehicle::CostInCredits))
                    .col(double_null(Vehicle::Length))
                    .col(integer_null(Vehicle::MaxAtmospheringSpeed))
                    .col(integer_null(Vehicle::Crew))
                    .col(integer_null(Vehicle::Passengers))
                    .col(big_integer_null(Vehicle::CargoCapacity))
                    .col(string_len_null(Vehicle::Consumables, 100))
                    .col(string_len_null(Vehicle::VehicleClass, 100))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    CostInCredits,
    Length,
    MaxAtmospheringSpeed,
    Crew,
    Passengers,
    CargoCapacity,
    Consumables,
    VehicleClass,
}
