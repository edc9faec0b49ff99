use crate::model::character::CreateCharacterDto;

use super::*;

/// Expect a character referencing existing planet and species to be created
#[tokio::test]
async fn creates_character_with_references() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;
    let human = test.catalog().insert_species("Human").await?;

    let character_service = CharacterService::new(&test.db);
    let result = character_service
        .create(CreateCharacterDto {
            name: "Luke Skywalker".to_string(),
            height: Some(172),
            mass: Some(77),
            planet_id: Some(tatooine.id),
            species_id: Some(human.id),
            ..Default::default()
        })
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let character = result.unwrap();
    assert_eq!(character.planet_id, Some(tatooine.id));
    assert_eq!(character.species_id, Some(human.id));
    assert_eq!(character.height, Some(172));

    Ok(())
}

/// Expect ReferenceError naming the planet when it does not exist
#[tokio::test]
async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let character_service = CharacterService::new(&test.db);
    let result = character_service
        .create(CreateCharacterDto {
            name: "Luke Skywalker".to_string(),
            planet_id: Some(42),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::ReferenceError {
            entity: EntityKind::Planet,
            id: 42,
            ..
        }))
    ));
    assert!(character_service.get_all().await.unwrap().is_empty());

    Ok(())
}

/// Expect ReferenceError naming the species when it does not exist
#[tokio::test]
async fn fails_for_nonexistent_species() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;

    let character_service = CharacterService::new(&test.db);
    let result = character_service
        .create(CreateCharacterDto {
            name: "Luke Skywalker".to_string(),
            planet_id: Some(tatooine.id),
            species_id: Some(7),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::ReferenceError {
            entity: EntityKind::Species,
            field: "species_id",
            id: 7,
        }))
    ));

    Ok(())
}

/// Expect UniquenessViolation for a name already in use
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog()
        .insert_character("Luke Skywalker", None, None)
        .await?;

    let character_service = CharacterService::new(&test.db);
    let result = character_service
        .create(CreateCharacterDto {
            name: "Luke Skywalker".to_string(),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::UniquenessViolation { .. }))
    ));

    Ok(())
}
