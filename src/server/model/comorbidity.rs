use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::comorbidity::{ComorbidityDto, CreateComorbidityDto, UpdateComorbidityDto},
    server::{
        error::AppError,
        util::validate::{optional, required, required_update},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comorbidity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comorbidity {
    pub fn from_entity(entity: entity::comorbidity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ComorbidityDto {
        ComorbidityDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateComorbidityParams {
    pub name: String,
    pub description: Option<String>,
}

impl CreateComorbidityParams {
    pub fn from_dto(dto: CreateComorbidityDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required("name", dto.name)?,
            description: optional(dto.description),
        })
    }

    pub fn into_active_model(self) -> entity::comorbidity::ActiveModel {
        let now = Utc::now();
        entity::comorbidity::ActiveModel {
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
pub struct UpdateComorbidityParams {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateComorbidityParams {
    pub fn from_dto(dto: UpdateComorbidityDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_update("name", dto.name)?,
            description: optional(dto.description),
        })
    }

    pub fn apply(self, model: entity::comorbidity::Model) -> entity::comorbidity::ActiveModel {
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
