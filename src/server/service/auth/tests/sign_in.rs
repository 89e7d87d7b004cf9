use super::*;

/// Expect a new token expiring 24 hours later when the account has none
#[tokio::test]
async fn issues_token_without_existing() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account, entity::prelude::Token)?;
    let account = test
        .account()
        .insert_mock_account("admin@example.com", "secret")
        .await?;

    let auth_service = AuthService::new(&test.db);
    let token = auth_service
        .sign_in_at(credentials("admin@example.com", "secret"), noon())
        .await
        .unwrap();

    let stored = TokenRepository::new(&test.db).get(&account.id).await?.unwrap();
    assert_eq!(stored.token, token);
    assert_eq!(stored.expired, noon() + Duration::hours(24));

    Ok(())
}

/// Expect the existing token to be returned unchanged while valid
#[tokio::test]
async fn reuses_valid_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account, entity::prelude::Token)?;
    test.account()
        .insert_mock_account("admin@example.com", "secret")
        .await?;

    let auth_service = AuthService::new(&test.db);
    let first = auth_service
        .sign_in_at(credentials("admin@example.com", "secret"), noon())
        .await
        .unwrap();
    let second = auth_service
        .sign_in_at(
            credentials("admin@example.com", "secret"),
            noon() + Duration::hours(1),
        )
        .await
        .unwrap();

    assert_eq!(first, second);

    Ok(())
}

/// Expect a token expiring exactly now to be reused
#[tokio::test]
async fn reuses_token_at_expiry_instant() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account, entity::prelude::Token)?;
    let account = test
        .account()
        .insert_mock_account("admin@example.com", "secret")
        .await?;
    test.account()
        .insert_token(&account.id, "still-valid", noon())
        .await?;

    let auth_service = AuthService::new(&test.db);
    let token = auth_service
        .sign_in_at(credentials("admin@example.com", "secret"), noon())
        .await
        .unwrap();

    assert_eq!(token, "still-valid");

    Ok(())
}

/// Expect an expired token to be replaced by a single new row
#[tokio::test]
async fn replaces_expired_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account, entity::prelude::Token)?;
    let account = test
        .account()
        .insert_mock_account("admin@example.com", "secret")
        .await?;
    test.account()
        .insert_token(&account.id, "expired", noon() - Duration::seconds(1))
        .await?;

    let auth_service = AuthService::new(&test.db);
    let token = auth_service
        .sign_in_at(credentials("admin@example.com", "secret"), noon())
        .await
        .unwrap();

    assert_ne!(token, "expired");
    let stored = TokenRepository::new(&test.db).get(&account.id).await?.unwrap();
    assert_eq!(stored.token, token);
    assert_eq!(stored.expired, noon() + Duration::hours(24));

    Ok(())
}

/// Expect the same error for an unknown email and a wrong password
#[tokio::test]
async fn rejects_bad_credentials_identically() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account, entity::prelude::Token)?;
    test.account()
        .insert_mock_account("admin@example.com", "secret")
        .await?;

    let auth_service = AuthService::new(&test.db);
    let unknown_email = auth_service
        .sign_in_at(credentials("nobody@example.com", "secret"), noon())
        .await;
    let wrong_password = auth_service
        .sign_in_at(credentials("admin@example.com", "wrong"), noon())
        .await;

    assert!(matches!(
        unknown_email,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        wrong_password,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expect missing credentials to be rejected before any lookup
#[tokio::test]
async fn requires_email_and_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let auth_service = AuthService::new(&test.db);
    let result = auth_service
        .sign_in_at(credentials("admin@example.com", ""), noon())
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::MissingCredentials))
    ));

    Ok(())
}
