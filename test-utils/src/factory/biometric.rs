//! Biometric reading factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating readings with normal adult vital signs.
pub struct BiometricFactory<'a> {
    db: &'a DatabaseConnection,
    patient_id: Uuid,
    device_id: Option<Uuid>,
    heart_rate: Option<i32>,
    recorded_at: DateTime<Utc>,
}

impl<'a> BiometricFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, patient_id: Uuid) -> Self {
        Self {
            db,
            patient_id,
            device_id: None,
            heart_rate: Some(72),
            recorded_at: Utc::now(),
        }
    }

    pub fn device_id(mut self, device_id: Uuid) -> Self {
        self.device_id = Some(device_id);
        self
    }

    pub fn heart_rate(mut self, heart_rate: i32) -> Self {
        self.heart_rate = Some(heart_rate);
        self
    }

    pub fn recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = recorded_at;
        self
    }

    pub async fn build(self) -> Result<entity::biometric::Model, DbErr> {
        let now = Utc::now();
        entity::biometric::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            patient_id: ActiveValue::Set(self.patient_id),
            device_id: ActiveValue::Set(self.device_id),
            heart_rate: ActiveValue::Set(self.heart_rate),
            systolic_pressure: ActiveValue::Set(Some(120)),
            diastolic_pressure: ActiveValue::Set(Some(80)),
            temperature: ActiveValue::Set(Some(36.8)),
            oxygen_saturation: ActiveValue::Set(Some(98.0)),
            respiratory_rate: ActiveValue::Set(Some(14)),
            glucose_level: ActiveValue::Set(None),
            recorded_at: ActiveValue::Set(self.recorded_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_biometric(
    db: &DatabaseConnection,
    patient_id: Uuid,
) -> Result<entity::biometric::Model, DbErr> {
    BiometricFactory::new(db, patient_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_reading_with_dependencies};

    #[tokio::test]
    async fn creates_reading_linked_to_device() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (patient, device, reading) = create_reading_with_dependencies(db).await?;

        assert_eq!(reading.patient_id, patient.id);
        assert_eq!(reading.device_id, Some(device.id));
        assert_eq!(device.patient_id, Some(patient.id));

        Ok(())
    }
}
