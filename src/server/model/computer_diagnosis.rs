use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::computer_diagnosis::{
        ComputerDiagnosisDto, CreateComputerDiagnosisDto, UpdateComputerDiagnosisDto,
    },
    server::{
        error::AppError,
        util::validate::{in_range, optional, required, required_update},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputerDiagnosis {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub biometric_id: Option<Uuid>,
    pub diagnosis: String,
    pub confidence: Option<f64>,
    pub model_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ComputerDiagnosis {
    pub fn from_entity(entity: entity::computer_diagnosis::Model) -> Self {
        Self {
            id: entity.id,
            patient_id: entity.patient_id,
            biometric_id: entity.biometric_id,
            diagnosis: entity.diagnosis,
            confidence: entity.confidence,
            model_version: entity.model_version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ComputerDiagnosisDto {
        ComputerDiagnosisDto {
            id: self.id,
            patient_id: self.patient_id,
            biometric_id: self.biometric_id,
            diagnosis: self.diagnosis,
            confidence: self.confidence,
            model_version: self.model_version,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateComputerDiagnosisParams {
    pub patient_id: Uuid,
    pub biometric_id: Option<Uuid>,
    pub diagnosis: String,
    pub confidence: Option<f64>,
    pub model_version: Option<String>,
}

impl CreateComputerDiagnosisParams {
    pub fn from_dto(dto: CreateComputerDiagnosisDto) -> Result<Self, AppError> {
        Ok(Self {
            patient_id: dto.patient_id,
            biometric_id: dto.biometric_id,
            diagnosis: required("diagnosis", dto.diagnosis)?,
            confidence: in_range("confidence", dto.confidence, 0.0, 1.0)?,
            model_version: optional(dto.model_version),
        })
    }

    pub fn into_active_model(self) -> entity::computer_diagnosis::ActiveModel {
        let now = Utc::now();
        entity::computer_diagnosis::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            patient_id: ActiveValue::Set(self.patient_id),
            biometric_id: ActiveValue::Set(self.biometric_id),
            diagnosis: ActiveValue::Set(self.diagnosis),
            confidence: ActiveValue::Set(self.confidence),
            model_version: ActiveValue::Set(self.model_version),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateComputerDiagnosisParams {
    pub biometric_id: Option<Uuid>,
    pub diagnosis: Option<String>,
    pub confidence: Option<f64>,
    pub model_version: Option<String>,
}

impl UpdateComputerDiagnosisParams {
    pub fn from_dto(dto: UpdateComputerDiagnosisDto) -> Result<Self, AppError> {
        Ok(Self {
            biometric_id: dto.biometric_id,
            diagnosis: required_update("diagnosis", dto.diagnosis)?,
            confidence: in_range("confidence", dto.confidence, 0.0, 1.0)?,
            model_version: optional(dto.model_version),
        })
    }

    pub fn apply(
        self,
        model: entity::computer_diagnosis::Model,
    ) -> entity::computer_diagnosis::ActiveModel {
        let mut active = model.into_active_model();
        if let Some(biometric_id) = self.biometric_id {
            active.biometric_id = ActiveValue::Set(Some(biometric_id));
        }
        if let Some(diagnosis) = self.diagnosis {
            active.diagnosis = ActiveValue::Set(diagnosis);
        }
        if let Some(confidence) = self.confidence {
            active.confidence = ActiveValue::Set(Some(confidence));
        }
        if let Some(model_version) = self.model_version {
            active.model_version = ActiveValue::Set(Some(model_version));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active
    }
}
