//! User management.
//!
//! Users are not cached: they carry the role that every authorization decision reads,
//! and the guard always loads them fresh.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{repository::CrudRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
    service::ensure_exists,
    util::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, hashing the supplied password.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user with role name
    /// - `Err(AppError::BadRequest)` - Role does not exist
    /// - `Err(AppError::DbErr)` - Username taken (mapped to 409) or other database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        ensure_exists::<entity::prelude::Role, _>(
            self.db,
            Some(params.role_id),
            entity::role::Column::Id,
            "role",
        )
        .await?;

        let password_hash = hash_password(&params.password)?;
        let user = CrudRepository::<entity::prelude::User, _>::new(self.db)
            .create(params.into_active_model(password_hash))
            .await?;

        self.get_by_id(user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found after creation".to_string()))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_with_role(id).await?;

        Ok(user.map(|(user, role)| User::from_entity(user, role)))
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all_with_role().await?;

        Ok(users
            .into_iter()
            .map(|(user, role)| User::from_entity(user, role))
            .collect())
    }

    /// Updates a user, re-hashing the password when a new one is supplied.
    /// Returns None if the user doesn't exist
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateUserParams,
    ) -> Result<Option<User>, AppError> {
        let repo = CrudRepository::<entity::prelude::User, _>::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::user::Column::Id).await? else {
            return Ok(None);
        };

        ensure_exists::<entity::prelude::Role, _>(
            self.db,
            params.role_id,
            entity::role::Column::Id,
            "role",
        )
        .await?;

        let password_hash = params
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        repo.update(params.apply(existing, password_hash)).await?;

        self.get_by_id(id).await
    }

    /// Soft deletes a user. Their tokens stop working immediately.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = CrudRepository::<entity::prelude::User, _>::new(self.db)
            .delete(id, entity::user::Column::Id)
            .await?;

        Ok(deleted)
    }
}
