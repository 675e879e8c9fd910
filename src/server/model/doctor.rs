use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::doctor::{CreateDoctorDto, DoctorDto, UpdateDoctorDto},
    server::{
        error::AppError,
        util::validate::{optional, required, required_update},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    /// National identity document number.
    pub dni: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub email: Option<String>,
    /// Login account, when the doctor has one.
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Doctor {
    pub fn from_entity(entity: entity::doctor::Model) -> Self {
        Self {
            id: entity.id,
            dni: entity.dni,
            first_name: entity.first_name,
            last_name: entity.last_name,
            specialty: entity.specialty,
            license_number: entity.license_number,
            email: entity.email,
            user_id: entity.user_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DoctorDto {
        DoctorDto {
            id: self.id,
            dni: self.dni,
            first_name: self.first_name,
            last_name: self.last_name,
            specialty: self.specialty,
            license_number: self.license_number,
            email: self.email,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDoctorParams {
    pub dni: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<Uuid>,
}

impl CreateDoctorParams {
    pub fn from_dto(dto: CreateDoctorDto) -> Result<Self, AppError> {
        Ok(Self {
            dni: required("dni", dto.dni)?,
            first_name: required("first_name", dto.first_name)?,
            last_name: required("last_name", dto.last_name)?,
            specialty: optional(dto.specialty),
            license_number: optional(dto.license_number),
            email: optional(dto.email),
            user_id: dto.user_id,
        })
    }

    pub fn into_active_model(self) -> entity::doctor::ActiveModel {
        let now = Utc::now();
        entity::doctor::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            dni: ActiveValue::Set(self.dni),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            specialty: ActiveValue::Set(self.specialty),
            license_number: ActiveValue::Set(self.license_number),
            email: ActiveValue::Set(self.email),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDoctorParams {
    pub dni: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<Uuid>,
}

impl UpdateDoctorParams {
    pub fn from_dto(dto: UpdateDoctorDto) -> Result<Self, AppError> {
        Ok(Self {
            dni: required_update("dni", dto.dni)?,
            first_name: required_update("first_name", dto.first_name)?,
            last_name: required_update("last_name", dto.last_name)?,
            specialty: optional(dto.specialty),
            license_number: optional(dto.license_number),
            email: optional(dto.email),
            user_id: dto.user_id,
        })
    }

    pub fn apply(self, model: entity::doctor::Model) -> entity::doctor::ActiveModel {
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
        if let Some(specialty) = self.specialty {
            active.specialty = ActiveValue::Set(Some(specialty));
        }
        if let Some(license_number) = self.license_number {
            active.license_number = ActiveValue::Set(Some(license_number));
        }
        if let Some(email) = self.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(user_id) = self.user_id {
            active.user_id = ActiveValue::Set(Some(user_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active
    }
}
