use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    data::repository::CrudRepository,
    error::AppError,
    model::biometric::{Biometric, CreateBiometricParams, UpdateBiometricParams},
    service::ensure_exists,
};

const CACHE_PREFIX: &str = "biometric";

type BiometricRepository<'a> = CrudRepository<'a, entity::prelude::Biometric, DatabaseConnection>;

pub struct BiometricService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> BiometricService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    /// Records a reading for a patient.
    ///
    /// # Returns
    /// - `Ok(Biometric)` - Stored reading
    /// - `Err(AppError::BadRequest)` - Patient or device does not exist
    pub async fn create(&self, params: CreateBiometricParams) -> Result<Biometric, AppError> {
        ensure_exists::<entity::prelude::Patient, _>(
            self.db,
            Some(params.patient_id),
            entity::patient::Column::Id,
            "patient",
        )
        .await?;
        ensure_exists::<entity::prelude::MonitoringDevice, _>(
            self.db,
            params.device_id,
            entity::monitoring_device::Column::Id,
            "monitoring device",
        )
        .await?;

        let reading = BiometricRepository::new(self.db)
            .create(params.into_active_model())
            .await?;

        Ok(Biometric::from_entity(reading))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Biometric>, AppError> {
        let key = Cache::key(CACHE_PREFIX, id);
        if let Some(reading) = self.cache.get::<Biometric>(&key).await {
            return Ok(Some(reading));
        }

        let reading = BiometricRepository::new(self.db)
            .get_by_id(id, entity::biometric::Column::Id)
            .await?
            .map(Biometric::from_entity);

        if let Some(reading) = &reading {
            self.cache.set(&key, reading).await;
        }

        Ok(reading)
    }

    pub async fn get_all(&self) -> Result<Vec<Biometric>, AppError> {
        let readings = BiometricRepository::new(self.db).get_all().await?;

        Ok(readings.into_iter().map(Biometric::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateBiometricParams,
    ) -> Result<Option<Biometric>, AppError> {
        let repo = BiometricRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::biometric::Column::Id).await? else {
            return Ok(None);
        };

        ensure_exists::<entity::prelude::MonitoringDevice, _>(
            self.db,
            params.device_id,
            entity::monitoring_device::Column::Id,
            "monitoring device",
        )
        .await?;

        let reading = repo.update(params.apply(existing)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        Ok(Some(Biometric::from_entity(reading)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = BiometricRepository::new(self.db)
            .delete(id, entity::biometric::Column::Id)
            .await?;

        if deleted {
            self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;
        }

        Ok(deleted)
    }
}
