//! Doctor factory for creating test doctor entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test doctors.
pub struct DoctorFactory<'a> {
    db: &'a DatabaseConnection,
    dni: String,
    first_name: String,
    last_name: String,
    specialty: Option<String>,
    user_id: Option<Uuid>,
}

impl<'a> DoctorFactory<'a> {
    /// Creates a new DoctorFactory with a unique DNI and generic names.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            dni: format!("D{:08}", id),
            first_name: "Gregory".to_string(),
            last_name: format!("Doctor {}", id),
            specialty: Some("Cardiology".to_string()),
            user_id: None,
        }
    }

    pub fn dni(mut self, dni: impl Into<String>) -> Self {
        self.dni = dni.into();
        self
    }

    pub fn user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub async fn build(self) -> Result<entity::doctor::Model, DbErr> {
        let now = Utc::now();
        entity::doctor::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            dni: ActiveValue::Set(self.dni),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            specialty: ActiveValue::Set(self.specialty),
            license_number: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_doctor(db: &DatabaseConnection) -> Result<entity::doctor::Model, DbErr> {
    DoctorFactory::new(db).build().await
}
