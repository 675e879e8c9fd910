use super::*;

/// Expected: Err(MissingToken) without an Authorization header
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Expected: Err(InvalidToken) for a token signed with another secret
#[tokio::test]
async fn rejects_token_with_wrong_signature() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let tokens = tokens();

    let (_, headers) = login_as(db, &TokenService::new("other-secret", 1), NURSE_ROLE).await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Expected: Err(InvalidToken) once the token has expired
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let expired = TokenService::new("test-secret", -2);

    let (_, headers) = login_as(db, &expired, DOCTOR_ROLE).await?;

    let result = AuthGuard::new(db, &tokens(), &headers)
        .require(&[Permission::AnyRole(&[])])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Expected: Ok(User) for any authenticated user when no role is listed
#[tokio::test]
async fn empty_role_list_admits_any_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let tokens = tokens();

    let (user, headers) = login_as(db, &tokens, NURSE_ROLE).await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.role, NURSE_ROLE);

    Ok(())
}

/// Expected: Err(AccessDenied) when a nurse hits a doctors-only route
#[tokio::test]
async fn denies_role_not_in_list() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let tokens = tokens();

    let (user, headers) = login_as(db, &tokens, NURSE_ROLE).await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) => assert_eq!(id, user.id),
        other => panic!("expected AccessDenied, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Expected: Ok(User) for a nurse on a clinical staff route
#[tokio::test]
async fn admits_role_in_list() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let tokens = tokens();

    let (_, headers) = login_as(db, &tokens, NURSE_ROLE).await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Expected: Ok(User) for an admin on both admin and role-restricted routes
#[tokio::test]
async fn admin_passes_every_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let tokens = tokens();

    let (_, headers) = login_as(db, &tokens, ADMIN_ROLE).await?;
    let guard = AuthGuard::new(db, &tokens, &headers);

    assert!(guard.require(&[Permission::Admin]).await.is_ok());
    assert!(guard.require(&[Permission::AnyRole(DOCTORS)]).await.is_ok());

    Ok(())
}

/// Expected: Err(AccessDenied) for a doctor on an admin route
#[tokio::test]
async fn denies_non_admin_on_admin_route() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let tokens = tokens();

    let (_, headers) = login_as(db, &tokens, DOCTOR_ROLE).await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Expected: Err(UserNotInDatabase) when the token's user was soft-deleted
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let tokens = tokens();

    let (user, headers) = login_as(db, &tokens, DOCTOR_ROLE).await?;
    CrudRepository::<entity::prelude::User, _>::new(db)
        .delete(user.id, entity::user::Column::Id)
        .await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}
