use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "species")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub classification: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub average_lifespan: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(200))", nullable)]
    pub hair_colors: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(200))", nullable)]
    pub skin_colors: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(200))", nullable)]
    pub eye_colors: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub language: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
