//! Role domain model and parameters.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::role::{CreateRoleDto, RoleDto, UpdateRoleDto},
    server::{
        error::AppError,
        util::validate::{optional, required, required_update},
    },
};

/// Name of the role that passes every permission check.
pub const ADMIN_ROLE: &str = "admin";
pub const DOCTOR_ROLE: &str = "doctor";
pub const NURSE_ROLE: &str = "nurse";

/// Roles seeded at startup. Route permissions refer to them by name.
pub const BUILT_IN_ROLES: [&str; 3] = [ADMIN_ROLE, DOCTOR_ROLE, NURSE_ROLE];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    pub fn is_built_in(&self) -> bool {
        BUILT_IN_ROLES.contains(&self.name.as_str())
    }

    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoleParams {
    pub name: String,
    pub description: Option<String>,
}

impl CreateRoleParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateRoleParams)` - Trimmed, validated parameters
    /// - `Err(AppError::BadRequest)` - Name is blank
    pub fn from_dto(dto: CreateRoleDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required("name", dto.name)?,
            description: optional(dto.description),
        })
    }

    pub fn into_active_model(self) -> entity::role::ActiveModel {
        let now = Utc::now();
        entity::role::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoleParams {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateRoleParams {
    pub fn from_dto(dto: UpdateRoleDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_update("name", dto.name)?,
            description: optional(dto.description),
        })
    }

    /// Applies the provided fields on top of the stored row.
    pub fn apply(self, model: entity::role::Model) -> entity::role::ActiveModel {
        let mut active = model.into_active_model();
        if let Some(name) = self.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = self.description {
            active.description = ActiveValue::Set(Some(description));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active
    }
}
