use crate::model::vehicle::CreateVehicleDto;

use super::*;

/// Expect the vehicle to be returned with all provided fields
#[tokio::test]
async fn creates_vehicle() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let vehicle_service = VehicleService::new(&test.db);
    let result = vehicle_service
        .create(CreateVehicleDto {
            name: "T-16 skyhopper".to_string(),
            model: Some("T-16 skyhopper".to_string()),
            length: Some(10.4),
            crew: Some(1),
            ..Default::default()
        })
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let vehicle = result.unwrap();
    assert_eq!(vehicle.length, Some(10.4));
    assert_eq!(
        vehicle_service.get_by_name("T-16 skyhopper").await.unwrap(),
        vehicle
    );

    Ok(())
}
