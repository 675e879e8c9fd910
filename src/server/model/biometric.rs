//! Biometric reading domain model and parameters.
//!
//! Readings are validated against physiologically plausible bounds, wide enough to
//! accept critical values while rejecting unit mistakes and typos.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::biometric::{BiometricDto, CreateBiometricDto, UpdateBiometricDto},
    server::{error::AppError, util::validate::in_range},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biometric {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub device_id: Option<Uuid>,
    pub heart_rate: Option<i32>,
    pub systolic_pressure: Option<i32>,
    pub diastolic_pressure: Option<i32>,
    pub temperature: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub respiratory_rate: Option<i32>,
    pub glucose_level: Option<f64>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Biometric {
    pub fn from_entity(entity: entity::biometric::Model) -> Self {
        Self {
            id: entity.id,
            patient_id: entity.patient_id,
            device_id: entity.device_id,
            heart_rate: entity.heart_rate,
            systolic_pressure: entity.systolic_pressure,
            diastolic_pressure: entity.diastolic_pressure,
            temperature: entity.temperature,
            oxygen_saturation: entity.oxygen_saturation,
            respiratory_rate: entity.respiratory_rate,
            glucose_level: entity.glucose_level,
            recorded_at: entity.recorded_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BiometricDto {
        BiometricDto {
            id: self.id,
            patient_id: self.patient_id,
            device_id: self.device_id,
            heart_rate: self.heart_rate,
            systolic_pressure: self.systolic_pressure,
            diastolic_pressure: self.diastolic_pressure,
            temperature: self.temperature,
            oxygen_saturation: self.oxygen_saturation,
            respiratory_rate: self.respiratory_rate,
            glucose_level: self.glucose_level,
            recorded_at: self.recorded_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Vital sign values shared by create and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vitals {
    pub heart_rate: Option<i32>,
    pub systolic_pressure: Option<i32>,
    pub diastolic_pressure: Option<i32>,
    pub temperature: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub respiratory_rate: Option<i32>,
    pub glucose_level: Option<f64>,
}

impl Vitals {
    /// Checks every provided value against its plausible range.
    ///
    /// # Returns
    /// - `Ok(Vitals)` - All provided values in range
    /// - `Err(AppError::BadRequest)` - Names the first out-of-range field
    pub fn validated(self) -> Result<Self, AppError> {
        Ok(Self {
            heart_rate: in_range("heart_rate", self.heart_rate, 0, 300)?,
            systolic_pressure: in_range("systolic_pressure", self.systolic_pressure, 0, 300)?,
            diastolic_pressure: in_range("diastolic_pressure", self.diastolic_pressure, 0, 200)?,
            temperature: in_range("temperature", self.temperature, 25.0, 45.0)?,
            oxygen_saturation: in_range("oxygen_saturation", self.oxygen_saturation, 0.0, 100.0)?,
            respiratory_rate: in_range("respiratory_rate", self.respiratory_rate, 0, 100)?,
            glucose_level: in_range("glucose_level", self.glucose_level, 0.0, 2000.0)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateBiometricParams {
    pub patient_id: Uuid,
    pub device_id: Option<Uuid>,
    pub vitals: Vitals,
    pub recorded_at: DateTime<Utc>,
}

impl CreateBiometricParams {
    pub fn from_dto(dto: CreateBiometricDto) -> Result<Self, AppError> {
        let vitals = Vitals {
            heart_rate: dto.heart_rate,
            systolic_pressure: dto.systolic_pressure,
            diastolic_pressure: dto.diastolic_pressure,
            temperature: dto.temperature,
            oxygen_saturation: dto.oxygen_saturation,
            respiratory_rate: dto.respiratory_rate,
            glucose_level: dto.glucose_level,
        }
        .validated()?;

        if vitals == Vitals::default() {
            return Err(AppError::BadRequest(
                "reading must contain at least one vital sign".to_string(),
            ));
        }

        Ok(Self {
            patient_id: dto.patient_id,
            device_id: dto.device_id,
            vitals,
            recorded_at: dto.recorded_at.unwrap_or_else(Utc::now),
        })
    }

    pub fn into_active_model(self) -> entity::biometric::ActiveModel {
        let now = Utc::now();
        entity::biometric::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            patient_id: ActiveValue::Set(self.patient_id),
            device_id: ActiveValue::Set(self.device_id),
            heart_rate: ActiveValue::Set(self.vitals.heart_rate),
            systolic_pressure: ActiveValue::Set(self.vitals.systolic_pressure),
            diastolic_pressure: ActiveValue::Set(self.vitals.diastolic_pressure),
            temperature: ActiveValue::Set(self.vitals.temperature),
            oxygen_saturation: ActiveValue::Set(self.vitals.oxygen_saturation),
            respiratory_rate: ActiveValue::Set(self.vitals.respiratory_rate),
            glucose_level: ActiveValue::Set(self.vitals.glucose_level),
            recorded_at: ActiveValue::Set(self.recorded_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBiometricParams {
    pub device_id: Option<Uuid>,
    pub vitals: Vitals,
    pub recorded_at: Option<DateTime<Utc>>,
}

impl UpdateBiometricParams {
    pub fn from_dto(dto: UpdateBiometricDto) -> Result<Self, AppError> {
        Ok(Self {
            device_id: dto.device_id,
            vitals: Vitals {
                heart_rate: dto.heart_rate,
                systolic_pressure: dto.systolic_pressure,
                diastolic_pressure: dto.diastolic_pressure,
                temperature: dto.temperature,
                oxygen_saturation: dto.oxygen_saturation,
                respiratory_rate: dto.respiratory_rate,
                glucose_level: dto.glucose_level,
            }
            .validated()?,
            recorded_at: dto.recorded_at,
        })
    }

    pub fn apply(self, model: entity::biometric::Model) -> entity::biometric::ActiveModel {
        let mut active = model.into_active_model();
        let vitals = self.vitals;
        if let Some(device_id) = self.device_id {
            active.device_id = ActiveValue::Set(Some(device_id));
        }
        if vitals.heart_rate.is_some() {
            active.heart_rate = ActiveValue::Set(vitals.heart_rate);
        }
        if vitals.systolic_pressure.is_some() {
            active.systolic_pressure = ActiveValue::Set(vitals.systolic_pressure);
        }
        if vitals.diastolic_pressure.is_some() {
            active.diastolic_pressure = ActiveValue::Set(vitals.diastolic_pressure);
        }
        if vitals.temperature.is_some() {
            active.temperature = ActiveValue::Set(vitals.temperature);
        }
        if vitals.oxygen_saturation.is_some() {
            active.oxygen_saturation = ActiveValue::Set(vitals.oxygen_saturation);
        }
        if vitals.respiratory_rate.is_some() {
            active.respiratory_rate = ActiveValue::Set(vitals.respiratory_rate);
        }
        if vitals.glucose_level.is_some() {
            active.glucose_level = ActiveValue::Set(vitals.glucose_level);
        }
        if let Some(recorded_at) = self.recorded_at {
            active.recorded_at = ActiveValue::Set(recorded_at);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active
    }
}
