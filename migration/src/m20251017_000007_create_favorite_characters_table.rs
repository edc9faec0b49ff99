use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000003_create_character_table::Character, m20251017_000005_create_user_table::User,
};

static IDX_FAVORITE_CHARACTERS_CHARACTER_ID: &str = "idx_favorite_characters_character_id";
static FK_FAVORITE_CHARACTERS_USER_ID: &str = "fk_favorite_characters_user_id";
static FK_FAVORITE_CHARACTERS_CHARACTER_ID: &str = "fk_favorite_characters_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(integer(FavoriteCharacters::UserId))
                    .col(integer(FavoriteCharacters::CharacterId))
                    .primary_key(
                        Index::create()
                            .col(FavoriteCharacters::UserId)
                            .col(FavoriteCharacters::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTERS_USER_ID)
                            .from(FavoriteCharacters::Table, FavoriteCharacters::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTERS_CHARACTER_ID)
                            .from(FavoriteCharacters::Table, FavoriteCharacters::CharacterId)
                            .to(Character::Table, Character::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // The composite primary key already covers lookups by user_id
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_CHARACTERS_CHARACTER_ID)
                    .table(FavoriteCharacters::Table)
                    .col(FavoriteCharacters::CharacterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_CHARACTERS_CHARACTER_ID)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteCharacters {
    Table,
    UserId,
    CharacterId,
}
