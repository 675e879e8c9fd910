use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    data::repository::CrudRepository,
    error::AppError,
    model::alert::{acknowledge, Alert, CreateAlertParams, UpdateAlertParams},
    service::ensure_exists,
};

const CACHE_PREFIX: &str = "alert";

type AlertRepository<'a> = CrudRepository<'a, entity::prelude::Alert, DatabaseConnection>;

pub struct AlertService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> AlertService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    /// Raises an alert for a patient
    pub async fn create(&self, params: CreateAlertParams) -> Result<Alert, AppError> {
        ensure_exists::<entity::prelude::Patient, _>(
            self.db,
            Some(params.patient_id),
            entity::patient::Column::Id,
            "patient",
        )
        .await?;
        ensure_exists::<entity::prelude::Biometric, _>(
            self.db,
            params.biometric_id,
            entity::biometric::Column::Id,
            "biometric",
        )
        .await?;

        let alert = AlertRepository::new(self.db)
            .create(params.into_active_model())
            .await?;

        tracing::info!(
            "Alert {} raised for patient {} ({:?})",
            alert.id,
            alert.patient_id,
            alert.severity
        );

        Ok(Alert::from_entity(alert))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Alert>, AppError> {
        let key = Cache::key(CACHE_PREFIX, id);
        if let Some(alert) = self.cache.get::<Alert>(&key).await {
            return Ok(Some(alert));
        }

        let alert = AlertRepository::new(self.db)
            .get_by_id(id, entity::alert::Column::Id)
            .await?
            .map(Alert::from_entity);

        if let Some(alert) = &alert {
            self.cache.set(&key, alert).await;
        }

        Ok(alert)
    }

    pub async fn get_all(&self) -> Result<Vec<Alert>, AppError> {
        let alerts = AlertRepository::new(self.db).get_all().await?;

        Ok(alerts.into_iter().map(Alert::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateAlertParams,
    ) -> Result<Option<Alert>, AppError> {
        let repo = AlertRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::alert::Column::Id).await? else {
            return Ok(None);
        };

        ensure_exists::<entity::prelude::Biometric, _>(
            self.db,
            params.biometric_id,
            entity::biometric::Column::Id,
            "biometric",
        )
        .await?;

        let alert = repo.update(params.apply(existing)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        Ok(Some(Alert::from_entity(alert)))
    }

    /// Marks an alert as acknowledged by a user.
    ///
    /// Acknowledging an already acknowledged alert keeps the original acknowledger
    /// and timestamp.
    ///
    /// # Arguments
    /// - `id` - Alert to acknowledge
    /// - `user_id` - Authenticated user acknowledging it
    ///
    /// # Returns
    /// - `Ok(Some(Alert))` - The acknowledged alert
    /// - `Ok(None)` - Alert not found
    pub async fn acknowledge(&self, id: Uuid, user_id: Uuid) -> Result<Option<Alert>, AppError> {
        let repo = AlertRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::alert::Column::Id).await? else {
            return Ok(None);
        };

        if existing.acknowledged {
            return Ok(Some(Alert::from_entity(existing)));
        }

        let alert = repo.update(acknowledge(existing, user_id)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        tracing::info!("Alert {} acknowledged by user {}", id, user_id);

        Ok(Some(Alert::from_entity(alert)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = AlertRepository::new(self.db)
            .delete(id, entity::alert::Column::Id)
            .await?;

        if deleted {
            self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;
        }

        Ok(deleted)
    }
}
