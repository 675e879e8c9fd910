use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Mobile,
    Home,
    Work,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhoneDto {
    pub id: Uuid,
    pub number: String,
    pub kind: PhoneKind,
    pub patient_id: Option<Uuid>,
    pub doctor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A phone belongs to a patient, a doctor, or both.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePhoneDto {
    pub number: String,
    pub kind: PhoneKind,
    pub patient_id: Option<Uuid>,
    pub doctor_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePhoneDto {
    pub number: Option<String>,
    pub kind: Option<PhoneKind>,
    pub patient_id: Option<Uuid>,
    pub doctor_id: Option<Uuid>,
}
