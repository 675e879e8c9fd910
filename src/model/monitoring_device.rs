use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonitoringDeviceDto {
    pub id: Uuid,
    pub serial_number: String,
    pub model: String,
    pub manufacturer: Option<String>,
    pub status: DeviceStatus,
    pub patient_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMonitoringDeviceDto {
    pub serial_number: String,
    pub model: String,
    pub manufacturer: Option<String>,
    /// Defaults to `active`.
    #[serde(default)]
    pub status: DeviceStatus,
    pub patient_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMonitoringDeviceDto {
    pub serial_number: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub status: Option<DeviceStatus>,
    pub patient_id: Option<Uuid>,
}
