use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::favorite::FavoriteKind,
    server::model::db::{CharacterModel, PlanetModel, UserModel, VehicleModel},
};

/// Repository over the `favorite_planets`, `favorite_characters` and `favorite_vehicles`
/// join tables, selected by [`FavoriteKind`].
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether the user has favorited the target
    pub async fn exists(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    ) -> Result<bool, DbErr> {
        let found = match kind {
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::find_by_id((user_id, target_id))
                    .one(self.db)
                    .await?
                    .is_some()
            }
            FavoriteKind::Character => {
                entity::prelude::FavoriteCharacter::find_by_id((user_id, target_id))
                    .one(self.db)
                    .await?
                    .is_some()
            }
            FavoriteKind::Vehicle => {
                entity::prelude::FavoriteVehicle::find_by_id((user_id, target_id))
                    .one(self.db)
                    .await?
                    .is_some()
            }
        };

        Ok(found)
    }

    /// Records that the user favorited the target
    ///
    /// Fails on the composite primary key if the pair already exists and on the foreign
    /// keys if either row does not.
    pub async fn create(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    ) -> Result<(), DbErr> {
        match kind {
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::insert(entity::favorite_planet::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    planet_id: ActiveValue::Set(target_id),
                })
                .exec_without_returning(self.db)
                .await?;
            }
            FavoriteKind::Character => {
                entity::prelude::FavoriteCharacter::insert(
                    entity::favorite_character::ActiveModel {
                        user_id: ActiveValue::Set(user_id),
                        character_id: ActiveValue::Set(target_id),
                    },
                )
                .exec_without_returning(self.db)
                .await?;
            }
            FavoriteKind::Vehicle => {
                entity::prelude::FavoriteVehicle::insert(entity::favorite_vehicle::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    vehicle_id: ActiveValue::Set(target_id),
                })
                .exec_without_returning(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Deletes a single favorite association
    ///
    /// Returns OK regardless of the association existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        match kind {
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::delete_by_id((user_id, target_id))
                    .exec(self.db)
                    .await
            }
            FavoriteKind::Character => {
                entity::prelude::FavoriteCharacter::delete_by_id((user_id, target_id))
                    .exec(self.db)
                    .await
            }
            FavoriteKind::Vehicle => {
                entity::prelude::FavoriteVehicle::delete_by_id((user_id, target_id))
                    .exec(self.db)
                    .await
            }
        }
    }

    /// Deletes every favorite of the user across all three join tables
    ///
    /// # Returns
    /// - `Ok(u64)` - Total number of association rows removed
    pub async fn delete_many_by_user_id(&self, user_id: i32) -> Result<u64, DbErr> {
        let planets = entity::prelude::FavoritePlanet::delete_many()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        let characters = entity::prelude::FavoriteCharacter::delete_many()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        let vehicles = entity::prelude::FavoriteVehicle::delete_many()
            .filter(entity::favorite_vehicle::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(planets.rows_affected + characters.rows_affected + vehicles.rows_affected)
    }

    /// Deletes every association referencing one of the provided targets
    pub async fn delete_many_by_target_ids(
        &self,
        kind: FavoriteKind,
        target_ids: &[i32],
    ) -> Result<DeleteResult, DbErr> {
        let target_ids = target_ids.iter().copied();

        match kind {
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::delete_many()
                    .filter(entity::favorite_planet::Column::PlanetId.is_in(target_ids))
                    .exec(self.db)
                    .await
            }
            FavoriteKind::Character => {
                entity::prelude::FavoriteCharacter::delete_many()
                    .filter(entity::favorite_character::Column::CharacterId.is_in(target_ids))
                    .exec(self.db)
                    .await
            }
            FavoriteKind::Vehicle => {
                entity::prelude::FavoriteVehicle::delete_many()
                    .filter(entity::favorite_vehicle::Column::VehicleId.is_in(target_ids))
                    .exec(self.db)
                    .await
            }
        }
    }

    /// Gets the planets favorited by the user, ordered by planet ID
    pub async fn get_planets_by_user_id(&self, user_id: i32) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .inner_join(entity::prelude::FavoritePlanet)
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the characters favorited by the user, ordered by character ID
    pub async fn get_characters_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .inner_join(entity::prelude::FavoriteCharacter)
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the vehicles favorited by the user, ordered by vehicle ID
    pub async fn get_vehicles_by_user_id(&self, user_id: i32) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .inner_join(entity::prelude::FavoriteVehicle)
            .filter(entity::favorite_vehicle::Column::UserId.eq(user_id))
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the users who favorited the target, ordered by user ID
    pub async fn get_fans(
        &self,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<Vec<UserModel>, DbErr> {
        let query = match kind {
            FavoriteKind::Planet => entity::prelude::User::find()
                .inner_join(entity::prelude::FavoritePlanet)
                .filter(entity::favorite_planet::Column::PlanetId.eq(target_id)),
            FavoriteKind::Character => entity::prelude::User::find()
                .inner_join(entity::prelude::FavoriteCharacter)
                .filter(entity::favorite_character::Column::CharacterId.eq(target_id)),
            FavoriteKind::Vehicle => entity::prelude::User::find()
                .inner_join(entity::prelude::FavoriteVehicle)
                .filter(entity::favorite_vehicle::Column::VehicleId.eq(target_id)),
        };

        query
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
