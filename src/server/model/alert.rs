//! Alert domain model and parameters.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::alert::{AlertDto, AlertSeverity, CreateAlertDto, UpdateAlertDto},
    server::{
        error::AppError,
        util::validate::{required, required_update},
    },
};

impl From<AlertSeverity> for entity::sea_orm_active_enums::AlertSeverity {
    fn from(severity: AlertSeverity) -> Self {
        match severity {
            AlertSeverity::Low => Self::Low,
            AlertSeverity::Medium => Self::Medium,
            AlertSeverity::High => Self::High,
            AlertSeverity::Critical => Self::Critical,
        }
    }
}

impl From<entity::sea_orm_active_enums::AlertSeverity> for AlertSeverity {
    fn from(severity: entity::sea_orm_active_enums::AlertSeverity) -> Self {
        use entity::sea_orm_active_enums::AlertSeverity as Stored;

        match severity {
            Stored::Low => Self::Low,
            Stored::Medium => Self::Medium,
            Stored::High => Self::High,
            Stored::Critical => Self::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub patient_id: Uuid,
    /// Reading that triggered the alert, if any.
    pub biometric_id: Option<Uuid>,
    pub alert_type: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub acknowledged: bool,
    pub acknowledged_by: Option<Uuid>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Alert {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::alert::Model) -> Self {
        Self {
            id: entity.id,
            patient_id: entity.patient_id,
            biometric_id: entity.biometric_id,
            alert_type: entity.alert_type,
            severity: entity.severity.into(),
            message: entity.message,
            acknowledged: entity.acknowledged,
            acknowledged_by: entity.acknowledged_by,
            acknowledged_at: entity.acknowledged_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> AlertDto {
        AlertDto {
            id: self.id,
            patient_id: self.patient_id,
            biometric_id: self.biometric_id,
            alert_type: self.alert_type,
            severity: self.severity,
            message: self.message,
            acknowledged: self.acknowledged,
            acknowledged_by: self.acknowledged_by,
            acknowledged_at: self.acknowledged_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAlertParams {
    pub patient_id: Uuid,
    pub biometric_id: Option<Uuid>,
    pub alert_type: String,
    pub severity: AlertSeverity,
    pub message: String,
}

impl CreateAlertParams {
    pub fn from_dto(dto: CreateAlertDto) -> Result<Self, AppError> {
        Ok(Self {
            patient_id: dto.patient_id,
            biometric_id: dto.biometric_id,
            alert_type: required("alert_type", dto.alert_type)?,
            severity: dto.severity,
            message: required("message", dto.message)?,
        })
    }

    /// New alerts always start unacknowledged.
    pub fn into_active_model(self) -> entity::alert::ActiveModel {
        let now = Utc::now();
        entity::alert::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            patient_id: ActiveValue::Set(self.patient_id),
            biometric_id: ActiveValue::Set(self.biometric_id),
            alert_type: ActiveValue::Set(self.alert_type),
            severity: ActiveValue::Set(self.severity.into()),
            message: ActiveValue::Set(self.message),
            acknowledged: ActiveValue::Set(false),
            acknowledged_by: ActiveValue::Set(None),
            acknowledged_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAlertParams {
    pub biometric_id: Option<Uuid>,
    pub alert_type: Option<String>,
    pub severity: Option<AlertSeverity>,
    pub message: Option<String>,
}

impl UpdateAlertParams {
    pub fn from_dto(dto: UpdateAlertDto) -> Result<Self, AppError> {
        Ok(Self {
            biometric_id: dto.biometric_id,
            alert_type: required_update("alert_type", dto.alert_type)?,
            severity: dto.severity,
            message: required_update("message", dto.message)?,
        })
    }

    pub fn apply(self, model: entity::alert::Model) -> entity::alert::ActiveModel {
        let mut active = model.into_active_model();
        if let Some(biometric_id) = self.biometric_id {
            active.biometric_id = ActiveValue::Set(Some(biometric_id));
        }
        if let Some(alert_type) = self.alert_type {
            active.alert_type = ActiveValue::Set(alert_type);
        }
        if let Some(severity) = self.severity {
            active.severity = ActiveValue::Set(severity.into());
        }
        if let Some(message) = self.message {
            active.message = ActiveValue::Set(message);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active
    }
}

/// Marks an alert as acknowledged by `user_id` now.
pub fn acknowledge(model: entity::alert::Model, user_id: Uuid) -> entity::alert::ActiveModel {
    let now = Utc::now();
    let mut active = model.into_active_model();
    active.acknowledged = ActiveValue::Set(true);
    active.acknowledged_by = ActiveValue::Set(Some(user_id));
    active.acknowledged_at = ActiveValue::Set(Some(now));
    active.updated_at = ActiveValue::Set(now);
    active
}
