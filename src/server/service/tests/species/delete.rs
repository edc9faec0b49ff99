use sea_orm::EntityTrait;

use super::*;

/// Expect the species' characters and their favorites to be deleted with it
#[tokio::test]
async fn deletes_characters_of_species() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("a@b.com").await?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;
    let droid = test.catalog().insert_species("Droid").await?;
    let r2 = test
        .catalog()
        .insert_character("R2-D2", Some(tatooine.id), Some(droid.id))
        .await?;
    let luke = test
        .catalog()
        .insert_character("Luke Skywalker", Some(tatooine.id), None)
        .await?;
    test.favorite()
        .insert_favorite_character(user_model.id, r2.id)
        .await?;

    let species_service = SpeciesService::new(&test.db);
    let result = species_service.delete(droid.id).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let remaining = entity::prelude::Character::find().all(&test.db).await?;
    assert_eq!(remaining, vec![luke]);
    let favorites = entity::prelude::FavoriteCharacter::find()
        .all(&test.db)
        .await?;
    assert!(favorites.is_empty());
    // The planet the deleted character lived on is not part of the cascade
    assert!(entity::prelude::Planet::find_by_id(tatooine.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

/// Expect NotFound when deleting a species that does not exist
#[tokio::test]
async fn fails_for_nonexistent_species() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let species_service = SpeciesService::new(&test.db);
    let result = species_service.delete(1).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}
