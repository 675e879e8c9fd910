use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    data::repository::CrudRepository,
    error::AppError,
    model::comorbidity::{Comorbidity, CreateComorbidityParams, UpdateComorbidityParams},
};

const CACHE_PREFIX: &str = "comorbidity";

type ComorbidityRepository<'a> =
    CrudRepository<'a, entity::prelude::Comorbidity, DatabaseConnection>;

pub struct ComorbidityService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> ComorbidityService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    pub async fn create(&self, params: CreateComorbidityParams) -> Result<Comorbidity, AppError> {
        let comorbidity = ComorbidityRepository::new(self.db)
            .create(params.into_active_model())
            .await?;

        Ok(Comorbidity::from_entity(comorbidity))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Comorbidity>, AppError> {
        let key = Cache::key(CACHE_PREFIX, id);
        if let Some(comorbidity) = self.cache.get::<Comorbidity>(&key).await {
            return Ok(Some(comorbidity));
        }

        let comorbidity = ComorbidityRepository::new(self.db)
            .get_by_id(id, entity::comorbidity::Column::Id)
            .await?
            .map(Comorbidity::from_entity);

        if let Some(comorbidity) = &comorbidity {
            self.cache.set(&key, comorbidity).await;
        }

        Ok(comorbidity)
    }

    pub async fn get_all(&self) -> Result<Vec<Comorbidity>, AppError> {
        let comorbidities = ComorbidityRepository::new(self.db).get_all().await?;

        Ok(comorbidities
            .into_iter()
            .map(Comorbidity::from_entity)
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateComorbidityParams,
    ) -> Result<Option<Comorbidity>, AppError> {
        let repo = ComorbidityRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::comorbidity::Column::Id).await? else {
            return Ok(None);
        };

        let comorbidity = repo.update(params.apply(existing)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        Ok(Some(Comorbidity::from_entity(comorbidity)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = ComorbidityRepository::new(self.db)
            .delete(id, entity::comorbidity::Column::Id)
            .await?;

        if deleted {
            self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;
        }

        Ok(deleted)
    }
}
