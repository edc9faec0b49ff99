use crate::model::vehicle::UpdateVehicleDto;

use super::*;

/// Expect provided fields to change and absent fields to stay
#[tokio::test]
async fn updates_existing_vehicle() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let vehicle_model = test.catalog().insert_vehicle("Snowspeeder").await?;

    let vehicle_service = VehicleService::new(&test.db);
    let result = vehicle_service
        .update(
            vehicle_model.id,
            UpdateVehicleDto {
                crew: Some(Some(2)),
                vehicle_class: Some(Some("airspeeder".to_string())),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let vehicle = result.unwrap();
    assert_eq!(vehicle.name, "Snowspeeder");
    assert_eq!(vehicle.crew, Some(2));
    assert_eq!(vehicle.vehicle_class, Some("airspeeder".to_string()));

    Ok(())
}

/// Expect UniquenessViolation when renaming onto another vehicle's name
#[tokio::test]
async fn fails_to_rename_onto_existing_vehicle() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_vehicle("AT-AT").await?;
    let vehicle_model = test.catalog().insert_vehicle("AT-ST").await?;

    let vehicle_service = VehicleService::new(&test.db);
    let result = vehicle_service
        .update(
            vehicle_model.id,
            UpdateVehicleDto {
                name: Some("AT-AT".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::UniquenessViolation { .. }))
    ));
    assert_eq!(vehicle_service.get(vehicle_model.id).await.unwrap().name, "AT-ST");

    Ok(())
}

/// Expect NotFound when updating a vehicle that does not exist
#[tokio::test]
async fn fails_for_nonexistent_vehicle() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let vehicle_service = VehicleService::new(&test.db);
    let result = vehicle_service
        .update(
            1,
            UpdateVehicleDto {
                name: Some("Sail barge".to_string()),
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
