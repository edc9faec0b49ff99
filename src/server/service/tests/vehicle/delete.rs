use sea_orm::EntityTrait;

use super::*;

/// Expect favorites of the vehicle to be removed with it
#[tokio::test]
async fn deletes_favorites_of_vehicle() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("a@b.com").await?;
    let speeder = test.catalog().insert_vehicle("Snowspeeder").await?;
    let crawler = test.catalog().insert_vehicle("Sand Crawler").await?;
    test.favorite()
        .insert_favorite_vehicle(user_model.id, speeder.id)
        .await?;
    test.favorite()
        .insert_favorite_vehicle(user_model.id, crawler.id)
        .await?;

    let vehicle_service = VehicleService::new(&test.db);
    let result = vehicle_service.delete(speeder.id).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let favorites = entity::prelude::FavoriteVehicle::find().all(&test.db).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].vehicle_id, crawler.id);

    Ok(())
}

/// Expect NotFound when deleting a vehicle that does not exist
#[tokio::test]
async fn fails_for_nonexistent_vehicle() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let vehicle_service = VehicleService::new(&test.db);
    let result = vehicle_service.delete(1).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}
