use crate::model::planet::UpdatePlanetDto;

use super::*;

/// Expect provided fields to change and absent fields to stay
#[tokio::test]
async fn updates_existing_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_model = test.catalog().insert_planet("Alderan").await?;

    let planet_service = PlanetService::new(&test.db);
    let result = planet_service
        .update(
            planet_model.id,
            UpdatePlanetDto {
                name: Some("Alderaan".to_string()),
                population: Some(Some(2_000_000_000)),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let planet = result.unwrap();
    assert_eq!(planet.name, "Alderaan");
    assert_eq!(planet.population, Some(2_000_000_000));
    assert_eq!(planet.climate, None);

    Ok(())
}

/// Expect renaming a planet to its current name to succeed
#[tokio::test]
async fn allows_keeping_own_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_model = test.catalog().insert_planet("Hoth").await?;

    let planet_service = PlanetService::new(&test.db);
    let result = planet_service
        .update(
            planet_model.id,
            UpdatePlanetDto {
                name: Some("Hoth".to_string()),
                climate: Some(Some("frozen".to_string())),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);

    Ok(())
}

/// Expect UniquenessViolation when the new name belongs to another planet
#[tokio::test]
async fn fails_for_name_of_other_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_planet("Hoth").await?;
    let planet_model = test.catalog().insert_planet("Endor").await?;

    let planet_service = PlanetService::new(&test.db);
    let result = planet_service
        .update(
            planet_model.id,
            UpdatePlanetDto {
                name: Some("Hoth".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::UniquenessViolation { .. }))
    ));
    assert_eq!(planet_service.get(planet_model.id).await.unwrap().name, "Endor");

    Ok(())
}

/// Expect NotFound when updating a planet that does not exist
#[tokio::test]
async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let planet_service = PlanetService::new(&test.db);
    let result = planet_service
        .update(
            1,
            UpdatePlanetDto {
                name: Some("Dagobah".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}
