//! Login and token handling.

pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::User,
    service::auth::token::{IssuedToken, TokenService},
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown usernames, soft-deleted users and wrong passwords all produce the
    /// same `InvalidCredentials` error.
    ///
    /// # Arguments
    /// - `username` - Login name
    /// - `password` - Plain-text password to check against the stored Argon2 hash
    ///
    /// # Returns
    /// - `Ok((IssuedToken, User))` - Signed token and the authenticated user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Credentials rejected
    /// - `Err(AppError::InternalErr)` - Stored hash malformed or token signing failed
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(IssuedToken, User), AppError> {
        let Some((user, role)) = UserRepository::new(self.db)
            .find_by_username(username.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = verify_password(password, &user.password_hash).map_err(|reason| {
            InternalError::MalformedPasswordHash {
                username: user.username.clone(),
                reason,
            }
        })?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = User::from_entity(user, role);
        let token = self.tokens.issue(&user)?;

        tracing::info!("User {} logged in", user.username);

        Ok((token, user))
    }
}
