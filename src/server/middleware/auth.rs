use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        role::{ADMIN_ROLE, DOCTOR_ROLE, NURSE_ROLE},
        user::User,
    },
    service::auth::token::TokenService,
    util::parse::parse_bearer_token,
};

/// Roles allowed to manage clinical records.
pub const DOCTORS: &[&str] = &[DOCTOR_ROLE];

/// Roles allowed to record readings and handle alerts.
pub const CLINICAL_STAFF: &[&str] = &[DOCTOR_ROLE, NURSE_ROLE];

pub enum Permission {
    /// Only administrators.
    Admin,
    /// Any of the listed roles. Administrators always pass, and an empty list admits
    /// every authenticated user.
    AnyRole(&'static [&'static str]),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the request and checks every permission.
    ///
    /// Role checks use the user's current role from the database rather than the
    /// role claim in the token, so a role change takes effect immediately.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all required permissions
    /// - `Err(AuthError::MissingToken | InvalidToken)` - No usable bearer token
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject was deleted
    /// - `Err(AuthError::AccessDenied)` - User lacks a required role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = parse_bearer_token(self.headers)?;
        let claims = self.tokens.verify(token)?;

        let Some((user, role)) = UserRepository::new(self.db)
            .find_with_role(claims.sub)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };
        let user = User::from_entity(user, role);

        if user.role == ADMIN_ROLE {
            return Ok(user);
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        format!("route requires the {} role", ADMIN_ROLE),
                    )
                    .into());
                }
                Permission::AnyRole(roles) => {
                    if !roles.is_empty() && !roles.contains(&user.role.as_str()) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "role '{}' is not one of {}",
                                user.role,
                                roles.join(", ")
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
