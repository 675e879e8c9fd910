use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    data::repository::CrudRepository,
    error::AppError,
    model::phone::{CreatePhoneParams, Phone, UpdatePhoneParams},
    service::ensure_exists,
};

const CACHE_PREFIX: &str = "phone";

type PhoneRepository<'a> = CrudRepository<'a, entity::prelude::Phone, DatabaseConnection>;

pub struct PhoneService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> PhoneService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    async fn check_owners(
        &self,
        patient_id: Option<Uuid>,
        doctor_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        ensure_exists::<entity::prelude::Patient, _>(
            self.db,
            patient_id,
            entity::patient::Column::Id,
            "patient",
        )
        .await?;
        ensure_exists::<entity::prelude::Doctor, _>(
            self.db,
            doctor_id,
            entity::doctor::Column::Id,
            "doctor",
        )
        .await
    }

    pub async fn create(&self, params: CreatePhoneParams) -> Result<Phone, AppError> {
        self.check_owners(params.patient_id, params.doctor_id).await?;

        let phone = PhoneRepository::new(self.db)
            .create(params.into_active_model())
            .await?;

        Ok(Phone::from_entity(phone))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Phone>, AppError> {
        let key = Cache::key(CACHE_PREFIX, id);
        if let Some(phone) = self.cache.get::<Phone>(&key).await {
            return Ok(Some(phone));
        }

        let phone = PhoneRepository::new(self.db)
            .get_by_id(id, entity::phone::Column::Id)
            .await?
            .map(Phone::from_entity);

        if let Some(phone) = &phone {
            self.cache.set(&key, phone).await;
        }

        Ok(phone)
    }

    pub async fn get_all(&self) -> Result<Vec<Phone>, AppError> {
        let phones = PhoneRepository::new(self.db).get_all().await?;

        Ok(phones.into_iter().map(Phone::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdatePhoneParams,
    ) -> Result<Option<Phone>, AppError> {
        let repo = PhoneRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::phone::Column::Id).await? else {
            return Ok(None);
        };

        self.check_owners(params.patient_id, params.doctor_id).await?;

        let phone = repo.update(params.apply(existing)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        Ok(Some(Phone::from_entity(phone)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = PhoneRepository::new(self.db)
            .delete(id, entity::phone::Column::Id)
            .await?;

        if deleted {
            self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;
        }

        Ok(deleted)
    }
}
