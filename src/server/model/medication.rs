use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::medication::{CreateMedicationDto, MedicationDto, UpdateMedicationDto},
    server::{
        error::AppError,
        util::validate::{optional, required, required_update},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Medication {
    pub fn from_entity(entity: entity::medication::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            dosage: entity.dosage,
            frequency: entity.frequency,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MedicationDto {
        MedicationDto {
            id: self.id,
            name: self.name,
            dosage: self.dosage,
            frequency: self.frequency,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMedicationParams {
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub description: Option<String>,
}

impl CreateMedicationParams {
    pub fn from_dto(dto: CreateMedicationDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required("name", dto.name)?,
            dosage: optional(dto.dosage),
            frequency: optional(dto.frequency),
            description: optional(dto.description),
        })
    }

    pub fn into_active_model(self) -> entity::medication::ActiveModel {
        let now = Utc::now();
        entity::medication::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            dosage: ActiveValue::Set(self.dosage),
            frequency: ActiveValue::Set(self.frequency),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMedicationParams {
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub description: Option<String>,
}

impl UpdateMedicationParams {
    pub fn from_dto(dto: UpdateMedicationDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_update("name", dto.name)?,
            dosage: optional(dto.dosage),
            frequency: optional(dto.frequency),
            description: optional(dto.description),
        })
    }

    pub fn apply(self, model: entity::medication::Model) -> entity::medication::ActiveModel {
        let mut active = model.into_active_model();
        if let Some(name) = self.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(dosage) = self.dosage {
            active.dosage = ActiveValue::Set(Some(dosage));
        }
        if let Some(frequency) = self.frequency {
            active.frequency = ActiveValue::Set(Some(frequency));
        }
        if let Some(description) = self.description {
            active.description = ActiveValue::Set(Some(description));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active
    }
}
