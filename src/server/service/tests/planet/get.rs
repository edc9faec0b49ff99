use super::*;

/// Expect NotFound when no planet has the ID
#[tokio::test]
async fn returns_not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let planet_service = PlanetService::new(&test.db);
    let result = planet_service.get(1).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}

/// Expect lookups by name to return the stored planet
#[tokio::test]
async fn finds_planet_by_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_model = test.catalog().insert_planet("Naboo").await?;

    let planet_service = PlanetService::new(&test.db);
    let planet = planet_service.get_by_name("Naboo").await.unwrap();

    assert_eq!(planet.id, planet_model.id);
    assert!(matches!(
        planet_service.get_by_name("naboo").await,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}

/// Expect the characters native to the planet and nobody else
#[tokio::test]
async fn lists_native_characters() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (tatooine, luke) = test
        .catalog()
        .insert_planet_with_character("Tatooine", "Luke Skywalker")
        .await?;
    test.catalog()
        .insert_planet_with_character("Naboo", "Padmé Amidala")
        .await?;
    test.catalog().insert_planet("Hoth").await?;

    let planet_service = PlanetService::new(&test.db);
    let characters = planet_service.get_characters(tatooine.id).await.unwrap();

    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].id, luke.id);
    assert_eq!(characters[0].planet_id, Some(tatooine.id));

    Ok(())
}

/// Expect NotFound when listing characters of a planet that does not exist
#[tokio::test]
async fn fails_to_list_characters_of_nonexistent_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let planet_service = PlanetService::new(&test.db);
    let result = planet_service.get_characters(1).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}
