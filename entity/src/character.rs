use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub birth_year: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub gender: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub hair_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub skin_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub eye_color: Option<String>,
    pub planet_id: Option<i32>,
    pub species_id: Option<i32>,
}

// Planet and species deletion removes characters in application code, the foreign
// keys themselves do not cascade.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::species::Entity",
        from = "Column::SpeciesId",
        to = "super::species::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Species,
}

impl Related<super::favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacter.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Species.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
