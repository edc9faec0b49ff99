use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub model: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub length: Option<f64>,
    pub max_atmosphering_speed: Option<i32>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub cargo_capacity: Option<i64>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub consumables: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub vehicle_class: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_vehicle::Entity")]
    FavoriteVehicle,
}

impl Related<super::favorite_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteVehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
