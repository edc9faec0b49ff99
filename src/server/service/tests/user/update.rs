use crate::model::user::UpdateUserDto;

use super::*;

/// Expect UniquenessViolation when taking another user's email
#[tokio::test]
async fn fails_for_email_of_other_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.user().insert_user("a@b.com").await?;
    let user_model = test.user().insert_user("c@d.com").await?;

    let user_service = UserService::new(&test.db);
    let result = user_service
        .update(
            user_model.id,
            UpdateUserDto {
                email: Some("a@b.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::UniquenessViolation { .. }))
    ));

    Ok(())
}

/// Expect names and activity to change without touching the email
#[tokio::test]
async fn updates_existing_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("a@b.com").await?;

    let user_service = UserService::new(&test.db);
    let user = user_service
        .update(
            user_model.id,
            UpdateUserDto {
                first_name: Some("Ben".to_string()),
                last_name: Some("Kenobi".to_string()),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.first_name, "Ben");
    assert_eq!(user.last_name, "Kenobi");
    assert!(!user.is_active);

    Ok(())
}

/// Expect NotFound when updating a user that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let user_service = UserService::new(&test.db);
    let result = user_service
        .update(
            1,
            UpdateUserDto {
                is_active: Some(false),
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
