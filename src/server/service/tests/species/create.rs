use crate::model::species::CreateSpeciesDto;

use super::*;

/// Expect UniquenessViolation on the second species with the same name
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let species_service = SpeciesService::new(&test.db);
    let first = species_service
        .create(CreateSpeciesDto {
            name: "Wookiee".to_string(),
            classification: Some("mammal".to_string()),
            ..Default::default()
        })
        .await;
    let second = species_service
        .create(CreateSpeciesDto {
            name: "Wookiee".to_string(),
            ..Default::default()
        })
        .await;

    assert!(first.is_ok(), "Error: {:?}", first);
    assert!(matches!(
        second,
        Err(Error::CatalogError(CatalogError::UniquenessViolation { .. }))
    ));

    Ok(())
}
