use super::*;

/// Expect NotFound when the user never favorited the target
#[tokio::test]
async fn fails_for_nonexistent_favorite() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("a@b.com").await?;
    let planet_model = test.catalog().insert_planet("Naboo").await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service
        .remove(user_model.id, FavoriteKind::Planet, planet_model.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}

/// Expect only the removed kind to be affected when IDs overlap across kinds
#[tokio::test]
async fn removes_only_requested_kind() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("a@b.com").await?;
    let planet_model = test.catalog().insert_planet("Naboo").await?;
    let vehicle_model = test.catalog().insert_vehicle("Naboo N-1").await?;
    test.favorite()
        .insert_favorite_planet(user_model.id, planet_model.id)
        .await?;
    test.favorite()
        .insert_favorite_vehicle(user_model.id, vehicle_model.id)
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    favorite_service
        .remove(user_model.id, FavoriteKind::Vehicle, vehicle_model.id)
        .await
        .unwrap();

    let planets = favorite_service
        .list(user_model.id, FavoriteKind::Planet)
        .await
        .unwrap();
    let vehicles = favorite_service
        .list(user_model.id, FavoriteKind::Vehicle)
        .await
        .unwrap();
    assert_eq!(planets.len(), 1);
    assert!(vehicles.is_empty());

    Ok(())
}
