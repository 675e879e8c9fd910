use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::repository::CrudRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission, CLINICAL_STAFF, DOCTORS},
    model::{
        role::{ADMIN_ROLE, DOCTOR_ROLE, NURSE_ROLE},
        user::User,
    },
    service::auth::token::TokenService,
};

mod require;

fn tokens() -> TokenService {
    TokenService::new("test-secret", 1)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Creates a user with the named role and returns headers carrying a token for them.
async fn login_as(
    db: &DatabaseConnection,
    tokens: &TokenService,
    role_name: &str,
) -> Result<(User, HeaderMap), AppError> {
    let (role, user) = factory::helpers::create_user_with_role(db, role_name).await?;
    let user = User::from_entity(user, Some(role));
    let issued = tokens.issue(&user)?;

    Ok((user, bearer(&issued.token)))
}
