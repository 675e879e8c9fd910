use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    data::repository::CrudRepository,
    error::AppError,
    model::doctor::{CreateDoctorParams, Doctor, UpdateDoctorParams},
    service::ensure_exists,
};

const CACHE_PREFIX: &str = "doctor";

type DoctorRepository<'a> = CrudRepository<'a, entity::prelude::Doctor, DatabaseConnection>;

pub struct DoctorService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> DoctorService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    pub async fn create(&self, params: CreateDoctorParams) -> Result<Doctor, AppError> {
        ensure_exists::<entity::prelude::User, _>(
            self.db,
            params.user_id,
            entity::user::Column::Id,
            "user",
        )
        .await?;

        let doctor = DoctorRepository::new(self.db)
            .create(params.into_active_model())
            .await?;

        Ok(Doctor::from_entity(doctor))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Doctor>, AppError> {
        let key = Cache::key(CACHE_PREFIX, id);
        if let Some(doctor) = self.cache.get::<Doctor>(&key).await {
            return Ok(Some(doctor));
        }

        let doctor = DoctorRepository::new(self.db)
            .get_by_id(id, entity::doctor::Column::Id)
            .await?
            .map(Doctor::from_entity);

        if let Some(doctor) = &doctor {
            self.cache.set(&key, doctor).await;
        }

        Ok(doctor)
    }

    pub async fn get_all(&self) -> Result<Vec<Doctor>, AppError> {
        let doctors = DoctorRepository::new(self.db).get_all().await?;

        Ok(doctors.into_iter().map(Doctor::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateDoctorParams,
    ) -> Result<Option<Doctor>, AppError> {
        let repo = DoctorRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::doctor::Column::Id).await? else {
            return Ok(None);
        };

        ensure_exists::<entity::prelude::User, _>(
            self.db,
            params.user_id,
            entity::user::Column::Id,
            "user",
        )
        .await?;

        let doctor = repo.update(params.apply(existing)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        Ok(Some(Doctor::from_entity(doctor)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = DoctorRepository::new(self.db)
            .delete(id, entity::doctor::Column::Id)
            .await?;

        if deleted {
            self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;
        }

        Ok(deleted)
    }
}
