//! User domain model and parameters.
//!
//! The domain `User` never carries the password hash. Passwords arrive in plain
//! text on create and update and are hashed by the service before they reach an
//! active model.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use uuid::Uuid;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        util::validate::{optional, required, required_update},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub role_id: Uuid,
    /// Name of the user's role, empty if the role was deleted.
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `role` - The user's role row; a soft-deleted role counts as none
    pub fn from_entity(entity: entity::user::Model, role: Option<entity::role::Model>) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role_id: entity.role_id,
            role: role
                .filter(|r| r.deleted_at.is_none())
                .map(|r| r.name)
                .unwrap_or_default(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role_id: self.role_id,
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub role_id: Uuid,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        if dto.password.is_empty() {
            return Err(AppError::BadRequest("password must not be empty".to_string()));
        }

        Ok(Self {
            username: required("username", dto.username)?,
            password: dto.password,
            email: optional(dto.email),
            role_id: dto.role_id,
        })
    }

    /// Builds the row to insert, given the already hashed password.
    pub fn into_active_model(self, password_hash: String) -> entity::user::ActiveModel {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(password_hash),
            email: ActiveValue::Set(self.email),
            role_id: ActiveValue::Set(self.role_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<Uuid>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        if dto.password.as_deref() == Some("") {
            return Err(AppError::BadRequest("password must not be empty".to_string()));
        }

        Ok(Self {
            username: required_update("username", dto.username)?,
            password: dto.password,
            email: optional(dto.email),
            role_id: dto.role_id,
        })
    }

    /// Applies the provided fields on top of the stored row.
    ///
    /// `password_hash` is the hash of `self.password` when one was supplied.
    pub fn apply(
        self,
        model: entity::user::Model,
        password_hash: Option<String>,
    ) -> entity::user::ActiveModel {
        let mut active = model.into_active_model();
        if let Some(username) = self.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(hash) = password_hash {
            active.password_hash = ActiveValue::Set(hash);
        }
        if let Some(email) = self.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(role_id) = self.role_id {
            active.role_id = ActiveValue::Set(role_id);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active
    }
}
