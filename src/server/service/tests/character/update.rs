use crate::model::character::UpdateCharacterDto;

use super::*;

/// Expect the character to move to another existing planet
#[tokio::test]
async fn moves_character_to_other_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (_, luke) = test
        .catalog()
        .insert_planet_with_character("Tatooine", "Luke Skywalker")
        .await?;
    let dagobah = test.catalog().insert_planet("Dagobah").await?;

    let character_service = CharacterService::new(&test.db);
    let result = character_service
        .update(
            luke.id,
            UpdateCharacterDto {
                planet_id: Some(Some(dagobah.id)),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().planet_id, Some(dagobah.id));

    Ok(())
}

/// Expect ReferenceError and no change when the new species does not exist
#[tokio::test]
async fn fails_for_nonexistent_species() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let human = test.catalog().insert_species("Human").await?;
    let luke = test
        .catalog()
        .insert_character("Luke Skywalker", None, Some(human.id))
        .await?;

    let character_service = CharacterService::new(&test.db);
    let result = character_service
        .update(
            luke.id,
            UpdateCharacterDto {
                species_id: Some(Some(human.id + 1)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::ReferenceError { .. }))
    ));
    assert_eq!(
        character_service.get(luke.id).await.unwrap().species_id,
        Some(human.id)
    );

    Ok(())
}

/// Expect NotFound when updating a character that does not exist
#[tokio::test]
async fn fails_for_nonexistent_character() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let character_service = CharacterService::new(&test.db);
    let result = character_service
        .update(
            1,
            UpdateCharacterDto {
                mass: Some(Some(80)),
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
