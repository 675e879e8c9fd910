//! Patient domain model and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::patient::{CreatePatientDto, PatientDto, UpdatePatientDto},
    server::{
        error::AppError,
        util::validate::{optional, required, required_update},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub dni: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    /// Attending doctor.
    pub doctor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::patient::Model) -> Self {
        Self {
            id: entity.id,
            dni: entity.dni,
            first_name: entity.first_name,
            last_name: entity.last_name,
            birth_date: entity.birth_date,
            gender: entity.gender,
            blood_type: entity.blood_type,
            address: entity.address,
            email: entity.email,
            doctor_id: entity.doctor_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> PatientDto {
        PatientDto {
            id: self.id,
            dni: self.dni,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            gender: self.gender,
            blood_type: self.blood_type,
            address: self.address,
            email: self.email,
            doctor_id: self.doctor_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Rejects birth dates in the future.
fn validate_birth_date(birth_date: Option<NaiveDate>) -> Result<Option<NaiveDate>, AppError> {
    match birth_date {
        Some(date) if date > Utc::now().date_naive() => Err(AppError::BadRequest(
            "birth_date must not be in the future".to_string(),
        )),
        other => Ok(other),
    }
}

#[derive(Debug, Clone)]
pub struct CreatePatientParams {
    pub dni: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub doctor_id: Option<Uuid>,
}

impl CreatePatientParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreatePatientParams)` - Trimmed, validated parameters
    /// - `Err(AppError::BadRequest)` - DNI or a name is blank, or the birth date is in the future
    pub fn from_dto(dto: CreatePatientDto) -> Result<Self, AppError> {
        Ok(Self {
            dni: required("dni", dto.dni)?,
            first_name: required("first_name", dto.first_name)?,
            last_name: required("last_name", dto.last_name)?,
            birth_date: validate_birth_date(dto.birth_date)?,
            gender: optional(dto.gender),
            blood_type: optional(dto.blood_type),
            address: optional(dto.address),
            email: optional(dto.email),
            doctor_id: dto.doctor_id,
        })
    }

    pub fn into_active_model(self) -> entity::patient::ActiveModel {
        let now = Utc::now();
        entity::patient::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            dni: ActiveValue::Set(self.dni),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            birth_date: ActiveValue::Set(self.birth_date),
            gender: ActiveValue::Set(self.gender),
            blood_type: ActiveValue::Set(self.blood_type),
            address: ActiveValue::Set(self.address),
            email: ActiveValue::Set(self.email),
            doctor_id: ActiveValue::Set(self.doctor_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePatientParams {
    pub dni: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub doctor_id: Option<Uuid>,
}

impl UpdatePatientParams {
    pub fn from_dto(dto: UpdatePatientDto) -> Result<Self, AppError> {
        Ok(Self {
            dni: required_update("dni", dto.dni)?,
            first_name: required_update("first_name", dto.first_name)?,
            last_name: required_update("last_name", dto.last_name)?,
            birth_date: validate_birth_date(dto.birth_date)?,
            gender: optional(dto.gender),
            blood_type: optional(dto.blood_type),
            address: optional(dto.address),
            email: optional(dto.email),
            doctor_id: dto.doctor_id,
        })
    }

    /// Applies the provided fields on top of the stored row.
    pub fn apply(self, model: entity::patient::Model) -> entity::patient::ActiveModel {
        let mut active = model.into_active_model();
        if let Some(dni) = self.dni {
            active.dni = ActiveValue::Set(dni);
        }
        if let Some(first_name) = self.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = self.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(birth_date) = self.birth_date {
            active.birth_date = ActiveValue::Set(Some(birth_date));
        }
        if let Some(gender) = self.gender {
            active.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(blood_type) = self.blood_type {
            active.blood_type = ActiveValue::Set(Some(blood_type));
        }
        if let Some(address) = self.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(email) = self.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(doctor_id) = self.doctor_id {
            active.doctor_id = ActiveValue::Set(Some(doctor_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active
    }
}
