use super::*;
use crate::server::{
    error::auth::AuthError,
    service::auth::{token::TokenService, AuthService},
    util::password::hash_password,
};

async fn user_with_password(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<entity::user::Model, AppError> {
    let role = factory::create_role_named(db, "doctor").await?;
    let user = factory::user::UserFactory::new(db, role.id)
        .username(username)
        .password_hash(hash_password(password)?)
        .build()
        .await?;

    Ok(user)
}

/// Expected: token whose claims identify the user and role
#[tokio::test]
async fn authenticates_valid_credentials() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let tokens = TokenService::new("test-secret", 1);

    let stored = user_with_password(db, "dr.house", "vicodin").await?;

    let (token, user) = AuthService::new(db, &tokens)
        .authenticate("dr.house", "vicodin")
        .await?;

    assert_eq!(user.id, stored.id);
    assert_eq!(user.role, "doctor");
    assert_eq!(token.expires_in, 3600);

    let claims = tokens.verify(&token.token)?;
    assert_eq!(claims.sub, stored.id);
    assert_eq!(claims.role, "doctor");

    Ok(())
}

/// Expected: InvalidCredentials for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let tokens = TokenService::new("test-secret", 1);

    user_with_password(db, "dr.house", "vicodin").await?;

    let result = AuthService::new(db, &tokens)
        .authenticate("dr.house", "lupus")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expected: InvalidCredentials for an unknown username
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let tokens = TokenService::new("test-secret", 1);

    let result = AuthService::new(db, &tokens)
        .authenticate("nobody", "secret")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expected: internal error rather than a panic for a corrupt stored hash
#[tokio::test]
async fn reports_malformed_hash() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let tokens = TokenService::new("test-secret", 1);

    let role = factory::create_role(db).await?;
    factory::user::UserFactory::new(db, role.id)
        .username("legacy")
        .password_hash("plaintext")
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .authenticate("legacy", "plaintext")
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
