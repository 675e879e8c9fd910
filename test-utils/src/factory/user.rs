//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// The stored `password_hash` defaults to a placeholder that no password
/// verifies against; tests exercising login pass a real hash.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db, role.id)
///     .username("dr.house")
///     .password_hash(hash_password("secret")?)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    role_id: Uuid,
    username: String,
    password_hash: String,
    email: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - password_hash: placeholder that matches no password
    /// - email: `None`
    pub fn new(db: &'a DatabaseConnection, role_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            role_id,
            username: format!("user{}", id),
            password_hash: "unusable".to_string(),
            email: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            email: ActiveValue::Set(self.email),
            role_id: ActiveValue::Set(self.role_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values holding the given role.
pub async fn create_user(
    db: &DatabaseConnection,
    role_id: Uuid,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, role_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::role::create_role};

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let role = create_role(db).await?;

        let user = create_user(db, role.id).await?;

        assert!(!user.username.is_empty());
        assert_eq!(user.role_id, role.id);
        assert!(user.email.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let role = create_role(db).await?;

        let user = UserFactory::new(db, role.id)
            .username("dr.house")
            .email("house@ppth.org")
            .password_hash("hash")
            .build()
            .await?;

        assert_eq!(user.username, "dr.house");
        assert_eq!(user.email.as_deref(), Some("house@ppth.org"));
        assert_eq!(user.password_hash, "hash");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_role() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = create_user(db, Uuid::new_v4()).await;

        assert!(result.is_err());

        Ok(())
    }
}
