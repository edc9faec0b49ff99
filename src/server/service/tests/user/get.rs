use super::*;

/// Expect users to be found by ID and email
#[tokio::test]
async fn finds_existing_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("a@b.com").await?;

    let user_service = UserService::new(&test.db);
    let by_id = user_service.get(user_model.id).await.unwrap();
    let by_email = user_service.get_by_email("a@b.com").await.unwrap();

    assert_eq!(by_id, by_email);
    assert_eq!(by_id.subscription_date, user_model.subscription_date);

    Ok(())
}

/// Expect NotFound for an unknown email
#[tokio::test]
async fn returns_not_found_for_unknown_email() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let user_service = UserService::new(&test.db);
    let result = user_service.get_by_email("a@b.com").await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}

/// Expect every user in ID order
#[tokio::test]
async fn lists_users_in_id_order() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let first = test.user().insert_user("z@b.com").await?;
    let second = test.user().insert_user("a@b.com").await?;

    let user_service = UserService::new(&test.db);
    let users = user_service.get_all().await.unwrap();

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
