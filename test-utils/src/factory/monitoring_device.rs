//! Monitoring device factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::DeviceStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct DeviceFactory<'a> {
    db: &'a DatabaseConnection,
    serial_number: String,
    status: DeviceStatus,
    patient_id: Option<Uuid>,
}

impl<'a> DeviceFactory<'a> {
    /// Creates a new DeviceFactory for an active, unassigned device.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            serial_number: format!("SN-{:06}", next_id()),
            status: DeviceStatus::Active,
            patient_id: None,
        }
    }

    pub fn status(mut self, status: DeviceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn patient_id(mut self, patient_id: Uuid) -> Self {
        self.patient_id = Some(patient_id);
        self
    }

    pub async fn build(self) -> Result<entity::monitoring_device::Model, DbErr> {
        let now = Utc::now();
        entity::monitoring_device::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            serial_number: ActiveValue::Set(self.serial_number),
            model: ActiveValue::Set("VitalSense 3".to_string()),
            manufacturer: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            patient_id: ActiveValue::Set(self.patient_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_device(
    db: &DatabaseConnection,
) -> Result<entity::monitoring_device::Model, DbErr> {
    DeviceFactory::new(db).build().await
}
