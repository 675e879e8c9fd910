use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A set of vital signs captured at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BiometricDto {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub device_id: Option<Uuid>,
    /// Beats per minute.
    pub heart_rate: Option<i32>,
    /// mmHg.
    pub systolic_pressure: Option<i32>,
    /// mmHg.
    pub diastolic_pressure: Option<i32>,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    /// SpO2 percentage.
    pub oxygen_saturation: Option<f64>,
    /// Breaths per minute.
    pub respiratory_rate: Option<i32>,
    /// mg/dL.
    pub glucose_level: Option<f64>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBiometricDto {
    pub patient_id: Uuid,
    pub device_id: Option<Uuid>,
    pub heart_rate: Option<i32>,
    pub systolic_pressure: Option<i32>,
    pub diastolic_pressure: Option<i32>,
    pub temperature: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub respiratory_rate: Option<i32>,
    pub glucose_level: Option<f64>,
    /// Defaults to the time the request is received.
    pub recorded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBiometricDto {
    pub device_id: Option<Uuid>,
    pub heart_rate: Option<i32>,
    pub systolic_pressure: Option<i32>,
    pub diastolic_pressure: Option<i32>,
    pub temperature: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub respiratory_rate: Option<i32>,
    pub glucose_level: Option<f64>,
    pub recorded_at: Option<DateTime<Utc>>,
}
