use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    data::repository::CrudRepository,
    error::AppError,
    model::medication::{CreateMedicationParams, Medication, UpdateMedicationParams},
};

const CACHE_PREFIX: &str = "medication";

type MedicationRepository<'a> = CrudRepository<'a, entity::prelude::Medication, DatabaseConnection>;

pub struct MedicationService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> MedicationService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    pub async fn create(&self, params: CreateMedicationParams) -> Result<Medication, AppError> {
        let medication = MedicationRepository::new(self.db)
            .create(params.into_active_model())
            .await?;

        Ok(Medication::from_entity(medication))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Medication>, AppError> {
        let key = Cache::key(CACHE_PREFIX, id);
        if let Some(medication) = self.cache.get::<Medication>(&key).await {
            return Ok(Some(medication));
        }

        let medication = MedicationRepository::new(self.db)
            .get_by_id(id, entity::medication::Column::Id)
            .await?
            .map(Medication::from_entity);

        if let Some(medication) = &medication {
            self.cache.set(&key, medication).await;
        }

        Ok(medication)
    }

    pub async fn get_all(&self) -> Result<Vec<Medication>, AppError> {
        let medications = MedicationRepository::new(self.db).get_all().await?;

        Ok(medications
            .into_iter()
            .map(Medication::from_entity)
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateMedicationParams,
    ) -> Result<Option<Medication>, AppError> {
        let repo = MedicationRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::medication::Column::Id).await? else {
            return Ok(None);
        };

        let medication = repo.update(params.apply(existing)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        Ok(Some(Medication::from_entity(medication)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = MedicationRepository::new(self.db)
            .delete(id, entity::medication::Column::Id)
            .await?;

        if deleted {
            self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;
        }

        Ok(deleted)
    }
}
