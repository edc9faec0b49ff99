use super::*;

/// Expect the favorite to show up in the user's list
#[tokio::test]
async fn adds_favorite() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("a@b.com").await?;
    let vehicle_model = test.catalog().insert_vehicle("Sand Crawler").await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service
        .add(user_model.id, FavoriteKind::Vehicle, vehicle_model.id)
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let favorites = favorite_service
        .list(user_model.id, FavoriteKind::Vehicle)
        .await
        .unwrap();
    assert_eq!(favorites.len(), 1);

    Ok(())
}

/// Expect AlreadyExists when adding the same pair twice
#[tokio::test]
async fn fails_for_duplicate_favorite() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("a@b.com").await?;
    let character_model = test.catalog().insert_character("Yoda", None, None).await?;

    let favorite_service = FavoriteService::new(&test.db);
    favorite_service
        .add(user_model.id, FavoriteKind::Character, character_model.id)
        .await
        .unwrap();
    let result = favorite_service
        .add(user_model.id, FavoriteKind::Character, character_model.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::AlreadyExists {
            kind: FavoriteKind::Character,
            ..
        }))
    ));

    Ok(())
}

/// Expect ReferenceError when the user does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_model = test.catalog().insert_planet("Naboo").await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service
        .add(1, FavoriteKind::Planet, planet_model.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::ReferenceError { field: "user_id", .. }))
    ));

    Ok(())
}

/// Expect ReferenceError when the target does not exist
#[tokio::test]
async fn fails_for_nonexistent_target() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("a@b.com").await?;
    // A planet with ID 1 exists, but the favorite targets a vehicle
    test.catalog().insert_planet("Naboo").await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service
        .add(user_model.id, FavoriteKind::Vehicle, 1)
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::ReferenceError { field: "vehicle_id", .. }))
    ));

    Ok(())
}
