use crate::model::species::UpdateSpeciesDto;

use super::*;

/// Expect provided fields to change and cleared fields to become null
#[tokio::test]
async fn updates_existing_species() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let species_model = test.catalog().insert_species("Wookie").await?;

    let species_service = SpeciesService::new(&test.db);
    species_service
        .update(
            species_model.id,
            UpdateSpeciesDto {
                language: Some(Some("Shyriiwook".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let result = species_service
        .update(
            species_model.id,
            UpdateSpeciesDto {
                name: Some("Wookiee".to_string()),
                language: Some(None),
                average_lifespan: Some(Some(400)),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let species = result.unwrap();
    assert_eq!(species.name, "Wookiee");
    assert_eq!(species.language, None);
    assert_eq!(species.average_lifespan, Some(400));

    Ok(())
}

/// Expect UniquenessViolation when the new name belongs to another species
#[tokio::test]
async fn fails_for_name_of_other_species() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_species("Human").await?;
    let species_model = test.catalog().insert_species("Ewok").await?;

    let species_service = SpeciesService::new(&test.db);
    let result = species_service
        .update(
            species_model.id,
            UpdateSpeciesDto {
                name: Some("Human".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::UniquenessViolation { .. }))
    ));
    assert_eq!(species_service.get(species_model.id).await.unwrap().name, "Ewok");

    Ok(())
}

/// Expect NotFound when updating a species that does not exist
#[tokio::test]
async fn fails_for_nonexistent_species() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let species_service = SpeciesService::new(&test.db);
    let result = species_service
        .update(
            1,
            UpdateSpeciesDto {
                name: Some("Hutt".to_string()),
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
