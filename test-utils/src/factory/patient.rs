//! Patient factory for creating test patient entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test patients.
///
/// # Example
///
/// ```rust,ignore
/// let patient = PatientFactory::new(&db)
///     .dni("12345678")
///     .doctor_id(doctor.id)
///     .build()
///     .await?;
/// ```
pub struct PatientFactory<'a> {
    db: &'a DatabaseConnection,
    dni: String,
    first_name: String,
    last_name: String,
    birth_date: Option<NaiveDate>,
    doctor_id: Option<Uuid>,
}

impl<'a> PatientFactory<'a> {
    /// Creates a new PatientFactory with a unique DNI.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            dni: format!("P{:08}", id),
            first_name: "Jane".to_string(),
            last_name: format!("Patient {}", id),
            birth_date: NaiveDate::from_ymd_opt(1980, 5, 17),
            doctor_id: None,
        }
    }

    pub fn dni(mut self, dni: impl Into<String>) -> Self {
        self.dni = dni.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn doctor_id(mut self, doctor_id: Uuid) -> Self {
        self.doctor_id = Some(doctor_id);
        self
    }

    pub async fn build(self) -> Result<entity::patient::Model, DbErr> {
        let now = Utc::now();
        entity::patient::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            dni: ActiveValue::Set(self.dni),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            birth_date: ActiveValue::Set(self.birth_date),
            gender: ActiveValue::Set(None),
            blood_type: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            doctor_id: ActiveValue::Set(self.doctor_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_patient(db: &DatabaseConnection) -> Result<entity::patient::Model, DbErr> {
    PatientFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::doctor::create_doctor};

    #[tokio::test]
    async fn creates_patient_assigned_to_doctor() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let doctor = create_doctor(db).await?;

        let patient = PatientFactory::new(db).doctor_id(doctor.id).build().await?;

        assert_eq!(patient.doctor_id, Some(doctor.id));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_dni() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        PatientFactory::new(db).dni("1234").build().await?;
        let result = PatientFactory::new(db).dni("1234").build().await;

        assert!(result.is_err());

        Ok(())
    }
}
