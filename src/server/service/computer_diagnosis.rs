use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    data::repository::CrudRepository,
    error::AppError,
    model::computer_diagnosis::{
        ComputerDiagnosis, CreateComputerDiagnosisParams, UpdateComputerDiagnosisParams,
    },
    service::ensure_exists,
};

const CACHE_PREFIX: &str = "computer_diagnosis";

type DiagnosisRepository<'a> =
    CrudRepository<'a, entity::prelude::ComputerDiagnosis, DatabaseConnection>;

pub struct ComputerDiagnosisService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> ComputerDiagnosisService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    pub async fn create(
        &self,
        params: CreateComputerDiagnosisParams,
    ) -> Result<ComputerDiagnosis, AppError> {
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

        let diagnosis = DiagnosisRepository::new(self.db)
            .create(params.into_active_model())
            .await?;

        Ok(ComputerDiagnosis::from_entity(diagnosis))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ComputerDiagnosis>, AppError> {
        let key = Cache::key(CACHE_PREFIX, id);
        if let Some(diagnosis) = self.cache.get::<ComputerDiagnosis>(&key).await {
            return Ok(Some(diagnosis));
        }

        let diagnosis = DiagnosisRepository::new(self.db)
            .get_by_id(id, entity::computer_diagnosis::Column::Id)
            .await?
            .map(ComputerDiagnosis::from_entity);

        if let Some(diagnosis) = &diagnosis {
            self.cache.set(&key, diagnosis).await;
        }

        Ok(diagnosis)
    }

    pub async fn get_all(&self) -> Result<Vec<ComputerDiagnosis>, AppError> {
        let diagnoses = DiagnosisRepository::new(self.db).get_all().await?;

        Ok(diagnoses
            .into_iter()
            .map(ComputerDiagnosis::from_entity)
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateComputerDiagnosisParams,
    ) -> Result<Option<ComputerDiagnosis>, AppError> {
        let repo = DiagnosisRepository::new(self.db);

        let Some(existing) = repo
            .get_by_id(id, entity::computer_diagnosis::Column::Id)
            .await?
        else {
            return Ok(None);
        };

        ensure_exists::<entity::prelude::Biometric, _>(
            self.db,
            params.biometric_id,
            entity::biometric::Column::Id,
            "biometric",
        )
        .await?;

        let diagnosis = repo.update(params.apply(existing)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        Ok(Some(ComputerDiagnosis::from_entity(diagnosis)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = DiagnosisRepository::new(self.db)
            .delete(id, entity::computer_diagnosis::Column::Id)
            .await?;

        if deleted {
            self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;
        }

        Ok(deleted)
    }
}
