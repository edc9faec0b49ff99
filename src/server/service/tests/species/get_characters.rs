use super::*;

/// Expect every character of the species in ID order
#[tokio::test]
async fn lists_characters_of_species() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let droid = test.catalog().insert_species("Droid").await?;
    let human = test.catalog().insert_species("Human").await?;
    let r2 = test
        .catalog()
        .insert_character("R2-D2", None, Some(droid.id))
        .await?;
    test.catalog()
        .insert_character("Luke Skywalker", None, Some(human.id))
        .await?;
    let c3po = test
        .catalog()
        .insert_character("C-3PO", None, Some(droid.id))
        .await?;

    let species_service = SpeciesService::new(&test.db);
    let characters = species_service.get_characters(droid.id).await.unwrap();

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![r2.id, c3po.id]);

    Ok(())
}

/// Expect NotFound for a species that does not exist
#[tokio::test]
async fn fails_for_nonexistent_species() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let species_service = SpeciesService::new(&test.db);
    let result = species_service.get_characters(1).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}
