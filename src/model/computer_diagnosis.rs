use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A diagnosis suggested by an automated model from a patient's readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComputerDiagnosisDto {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub biometric_id: Option<Uuid>,
    pub diagnosis: String,
    /// Model confidence between 0 and 1.
    pub confidence: Option<f64>,
    pub model_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateComputerDiagnosisDto {
    pub patient_id: Uuid,
    pub biometric_id: Option<Uuid>,
    pub diagnosis: String,
    pub confidence: Option<f64>,
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateComputerDiagnosisDto {
    pub biometric_id: Option<Uuid>,
    pub diagnosis: Option<String>,
    pub confidence: Option<f64>,
    pub model_version: Option<String>,
}
