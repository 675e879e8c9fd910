use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    data::repository::CrudRepository,
    error::AppError,
    model::monitoring_device::{
        CreateMonitoringDeviceParams, MonitoringDevice, UpdateMonitoringDeviceParams,
    },
    service::ensure_exists,
};

const CACHE_PREFIX: &str = "monitoring_device";

type DeviceRepository<'a> =
    CrudRepository<'a, entity::prelude::MonitoringDevice, DatabaseConnection>;

pub struct MonitoringDeviceService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> MonitoringDeviceService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    /// Registers a device, optionally assigning it to a patient.
    pub async fn create(
        &self,
        params: CreateMonitoringDeviceParams,
    ) -> Result<MonitoringDevice, AppError> {
        ensure_exists::<entity::prelude::Patient, _>(
            self.db,
            params.patient_id,
            entity::patient::Column::Id,
            "patient",
        )
        .await?;

        let device = DeviceRepository::new(self.db)
            .create(params.into_active_model())
            .await?;

        Ok(MonitoringDevice::from_entity(device))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<MonitoringDevice>, AppError> {
        let key = Cache::key(CACHE_PREFIX, id);
        if let Some(device) = self.cache.get::<MonitoringDevice>(&key).await {
            return Ok(Some(device));
        }

        let device = DeviceRepository::new(self.db)
            .get_by_id(id, entity::monitoring_device::Column::Id)
            .await?
            .map(MonitoringDevice::from_entity);

        if let Some(device) = &device {
            self.cache.set(&key, device).await;
        }

        Ok(device)
    }

    pub async fn get_all(&self) -> Result<Vec<MonitoringDevice>, AppError> {
        let devices = DeviceRepository::new(self.db).get_all().await?;

        Ok(devices
            .into_iter()
            .map(MonitoringDevice::from_entity)
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateMonitoringDeviceParams,
    ) -> Result<Option<MonitoringDevice>, AppError> {
        let repo = DeviceRepository::new(self.db);

        let Some(existing) = repo
            .get_by_id(id, entity::monitoring_device::Column::Id)
            .await?
        else {
            return Ok(None);
        };

        ensure_exists::<entity::prelude::Patient, _>(
            self.db,
            params.patient_id,
            entity::patient::Column::Id,
            "patient",
        )
        .await?;

        let device = repo.update(params.apply(existing)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        Ok(Some(MonitoringDevice::from_entity(device)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = DeviceRepository::new(self.db)
            .delete(id, entity::monitoring_device::Column::Id)
            .await?;

        if deleted {
            self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;
        }

        Ok(deleted)
    }
}
