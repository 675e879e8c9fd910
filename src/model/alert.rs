use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlertDto {
    pub id: Uuid,
    pub patient_id: Uuid,
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

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAlertDto {
    pub patient_id: Uuid,
    pub biometric_id: Option<Uuid>,
    pub alert_type: String,
    pub severity: AlertSeverity,
    pub message: String,
}

/// Acknowledgement goes through `PUT /api/alerts/{id}/acknowledge` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAlertDto {
    pub biometric_id: Option<Uuid>,
    pub alert_type: Option<String>,
    pub severity: Option<AlertSeverity>,
    pub message: Option<String>,
}
