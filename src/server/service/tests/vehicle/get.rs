use super::*;

/// Expect NotFound when no vehicle has the ID
#[tokio::test]
async fn returns_not_found_for_nonexistent_vehicle() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let vehicle_service = VehicleService::new(&test.db);
    let result = vehicle_service.get(1).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}

/// Expect lookups by name to return the stored vehicle and nothing for unknown names
#[tokio::test]
async fn finds_vehicle_by_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let vehicle_model = test.catalog().insert_vehicle("Sand Crawler").await?;

    let vehicle_service = VehicleService::new(&test.db);
    let vehicle = vehicle_service.get_by_name("Sand Crawler").await.unwrap();

    assert_eq!(vehicle.id, vehicle_model.id);
    assert!(matches!(
        vehicle_service.get_by_name("Speeder bike").await,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}
