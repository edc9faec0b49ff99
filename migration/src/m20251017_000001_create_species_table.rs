use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(pk_auto(Species::Id))
                    .col(string_len_uniq(Species::Name, 100))
                    .col(string_len_null(Species::Classification, 100))
                    .col(string_len_null(Species::Designation, 100))
                    .col(integer_null(Species::AverageHeight))
                    .col(integer_null(Species::AverageLifespan))
                    .col(string_len_null(Species::HairColors, 200))
                    .col(string_len_null(Species::SkinColors, 200))
                    .col(string_len_null(Species::EyeColors, 200))
                    .col(string_len_null(Species::Language, 100))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Species {
    Table,
    Id,
    Name,
    Classification,
    Designation,
    AverageHeight,
    AverageLifespan,
    HairColors,
    SkinColors,
    EyeColors,
    Language,
}
