use super::*;

/// Expect the new user to be active and serialized without a password
#[tokio::test]
async fn creates_active_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let user_service = UserService::new(&test.db);
    let result = user_service.create(new_user("leia@alderaan.gov")).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let user = result.unwrap();
    assert!(user.is_active);
    assert_eq!(user.first_name, "Leia");
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("password").is_none());

    Ok(())
}

/// Expect an explicit inactive flag to be kept
#[tokio::test]
async fn creates_inactive_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let user_service = UserService::new(&test.db);
    let user = user_service
        .create(CreateUserDto {
            is_active: Some(false),
            ..new_user("leia@alderaan.gov")
        })
        .await
        .unwrap();

    assert!(!user.is_active);

    Ok(())
}

/// Expect UniquenessViolation when the email is already registered
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.user().insert_user("a@b.com").await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.create(new_user("a@b.com")).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::UniquenessViolation { field: "email", .. }))
    ));

    Ok(())
}
