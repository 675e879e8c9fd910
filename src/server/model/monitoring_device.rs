use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::monitoring_device::{
        CreateMonitoringDeviceDto, DeviceStatus, MonitoringDeviceDto, UpdateMonitoringDeviceDto,
    },
    server::{
        error::AppError,
        util::validate::{optional, required, required_update},
    },
};

impl From<DeviceStatus> for entity::sea_orm_active_enums::DeviceStatus {
    fn from(status: DeviceStatus) -> Self {
        match status {
            DeviceStatus::Active => Self::Active,
            DeviceStatus::Inactive => Self::Inactive,
            DeviceStatus::Maintenance => Self::Maintenance,
        }
    }
}

impl From<entity::sea_orm_active_enums::DeviceStatus> for DeviceStatus {
    fn from(status: entity::sea_orm_active_enums::DeviceStatus) -> Self {
        use entity::sea_orm_active_enums::DeviceStatus as Stored;

        match status {
            Stored::Active => Self::Active,
            Stored::Inactive => Self::Inactive,
            Stored::Maintenance => Self::Maintenance,
        }
    }
}

/// A bedside or wearable monitor that produces biometric readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringDevice {
    pub id: Uuid,
    pub serial_number: String,
    pub model: String,
    pub manufacturer: Option<String>,
    pub status: DeviceStatus,
    /// Patient the device is currently assigned to.
    pub patient_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MonitoringDevice {
    pub fn from_entity(entity: entity::monitoring_device::Model) -> Self {
        Self {
            id: entity.id,
            serial_number: entity.serial_number,
            model: entity.model,
            manufacturer: entity.manufacturer,
            status: entity.status.into(),
            patient_id: entity.patient_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MonitoringDeviceDto {
        MonitoringDeviceDto {
            id: self.id,
            serial_number: self.serial_number,
            model: self.model,
            manufacturer: self.manufacturer,
            status: self.status,
            patient_id: self.patient_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMonitoringDeviceParams {
    pub serial_number: String,
    pub model: String,
    pub manufacturer: Option<String>,
    pub status: DeviceStatus,
    pub patient_id: Option<Uuid>,
}

impl CreateMonitoringDeviceParams {
    pub fn from_dto(dto: CreateMonitoringDeviceDto) -> Result<Self, AppError> {
        Ok(Self {
            serial_number: required("serial_number", dto.serial_number)?,
            model: required("model", dto.model)?,
            manufacturer: optional(dto.manufacturer),
            status: dto.status,
            patient_id: dto.patient_id,
        })
    }

    pub fn into_active_model(self) -> entity::monitoring_device::ActiveModel {
        let now = Utc::now();
        entity::monitoring_device::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            serial_number: ActiveValue::Set(self.serial_number),
            model: ActiveValue::Set(self.model),
            manufacturer: ActiveValue::Set(self.manufacturer),
            status: ActiveValue::Set(self.status.into()),
            patient_id: ActiveValue::Set(self.patient_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMonitoringDeviceParams {
    pub serial_number: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub status: Option<DeviceStatus>,
    pub patient_id: Option<Uuid>,
}

impl UpdateMonitoringDeviceParams {
    pub fn from_dto(dto: UpdateMonitoringDeviceDto) -> Result<Self, AppError> {
        Ok(Self {
            serial_number: required_update("serial_number", dto.serial_number)?,
            model: required_update("model", dto.model)?,
            manufacturer: optional(dto.manufacturer),
            status: dto.status,
            patient_id: dto.patient_id,
        })
    }

    pub fn apply(
        self,
        model: entity::monitoring_device::Model,
    ) -> entity::monitoring_device::ActiveModel {
        let mut active = model.into_active_model();
        if let Some(serial_number) = self.serial_number {
            active.serial_number = ActiveValue::Set(serial_number);
        }
        if let Some(device_model) = self.model {
            active.model = ActiveValue::Set(device_model);
        }
        if let Some(manufacturer) = self.manufacturer {
            active.manufacturer = ActiveValue::Set(Some(manufacturer));
        }
        if let Some(status) = self.status {
            active.status = ActiveValue::Set(status.into());
        }
        if let Some(patient_id) = self.patient_id {
            active.patient_id = ActiveValue::Set(Some(patient_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active
    }
}
