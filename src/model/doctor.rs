use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorDto {
    pub id: Uuid,
    pub dni: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDoctorDto {
    pub dni: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDoctorDto {
    pub dni: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<Uuid>,
}
