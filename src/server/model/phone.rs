use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::phone::{CreatePhoneDto, PhoneDto, PhoneKind, UpdatePhoneDto},
    server::{
        error::AppError,
        util::validate::{required, required_update},
    },
};

impl From<PhoneKind> for entity::sea_orm_active_enums::PhoneKind {
    fn from(kind: PhoneKind) -> Self {
        match kind {
            PhoneKind::Mobile => Self::Mobile,
            PhoneKind::Home => Self::Home,
            PhoneKind::Work => Self::Work,
        }
    }
}

impl From<entity::sea_orm_active_enums::PhoneKind> for PhoneKind {
    fn from(kind: entity::sea_orm_active_enums::PhoneKind) -> Self {
        use entity::sea_orm_active_enums::PhoneKind as Stored;

        match kind {
            Stored::Mobile => Self::Mobile,
            Stored::Home => Self::Home,
            Stored::Work => Self::Work,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    pub id: Uuid,
    pub number: String,
    pub kind: PhoneKind,
    pub patient_id: Option<Uuid>,
    pub doctor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Phone {
    pub fn from_entity(entity: entity::phone::Model) -> Self {
        Self {
            id: entity.id,
            number: entity.number,
            kind: entity.kind.into(),
            patient_id: entity.patient_id,
            doctor_id: entity.doctor_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PhoneDto {
        PhoneDto {
            id: self.id,
            number: self.number,
            kind: self.kind,
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePhoneParams {
    pub number: String,
    pub kind: PhoneKind,
    pub patient_id: Option<Uuid>,
    pub doctor_id: Option<Uuid>,
}

impl CreatePhoneParams {
    /// Validates a creation request; the phone must belong to a patient or a doctor.
    pub fn from_dto(dto: CreatePhoneDto) -> Result<Self, AppError> {
        if dto.patient_id.is_none() && dto.doctor_id.is_none() {
            return Err(AppError::BadRequest(
                "phone must belong to a patient or a doctor".to_string(),
            ));
        }

        Ok(Self {
            number: required("number", dto.number)?,
            kind: dto.kind,
            patient_id: dto.patient_id,
            doctor_id: dto.doctor_id,
        })
    }

    pub fn into_active_model(self) -> entity::phone::ActiveModel {
        let now = Utc::now();
        entity::phone::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            number: ActiveValue::Set(self.number),
            kind: ActiveValue::Set(self.kind.into()),
            patient_id: ActiveValue::Set(self.patient_id),
            doctor_id: ActiveValue::Set(self.doctor_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePhoneParams {
    pub number: Option<String>,
    pub kind: Option<PhoneKind>,
    pub patient_id: Option<Uuid>,
    pub doctor_id: Option<Uuid>,
}

impl UpdatePhoneParams {
    pub fn from_dto(dto: UpdatePhoneDto) -> Result<Self, AppError> {
        Ok(Self {
            number: required_update("number", dto.number)?,
            kind: dto.kind,
            patient_id: dto.patient_id,
            doctor_id: dto.doctor_id,
        })
    }

    pub fn apply(self, model: entity::phone::Model) -> entity::phone::ActiveModel {
        let mut active = model.into_active_model();
        if let Some(number) = self.number {
            active.number = ActiveValue::Set(number);
        }
        if let Some(kind) = self.kind {
            active.kind = ActiveValue::Set(kind.into());
        }
        if let Some(patient_id) = self.patient_id {
            active.patient_id = ActiveValue::Set(Some(patient_id));
        }
        if let Some(doctor_id) = self.doctor_id {
            active.doctor_id = ActiveValue::Set(Some(doctor_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active
    }
}
