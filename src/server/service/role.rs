use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    data::repository::CrudRepository,
    error::AppError,
    model::role::{CreateRoleParams, Role, UpdateRoleParams},
};

const CACHE_PREFIX: &str = "role";

type RoleRepository<'a> = CrudRepository<'a, entity::prelude::Role, DatabaseConnection>;

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    /// Creates a new role
    pub async fn create(&self, params: CreateRoleParams) -> Result<Role, AppError> {
        let role = RoleRepository::new(self.db)
            .create(params.into_active_model())
            .await?;

        Ok(Role::from_entity(role))
    }

    /// Gets a role by ID, consulting the cache first
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Role>, AppError> {
        let key = Cache::key(CACHE_PREFIX, id);
        if let Some(role) = self.cache.get::<Role>(&key).await {
            return Ok(Some(role));
        }

        let role = RoleRepository::new(self.db)
            .get_by_id(id, entity::role::Column::Id)
            .await?
            .map(Role::from_entity);

        if let Some(role) = &role {
            self.cache.set(&key, role).await;
        }

        Ok(role)
    }

    pub async fn get_all(&self) -> Result<Vec<Role>, AppError> {
        let roles = RoleRepository::new(self.db).get_all().await?;

        Ok(roles.into_iter().map(Role::from_entity).collect())
    }

    /// Updates a role's name and description
    /// Returns None if the role doesn't exist
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateRoleParams,
    ) -> Result<Option<Role>, AppError> {
        let repo = RoleRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::role::Column::Id).await? else {
            return Ok(None);
        };

        let role = repo.update(params.apply(existing)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        Ok(Some(Role::from_entity(role)))
    }

    /// Soft deletes a role
    /// Returns true if deleted, false if not found
    ///
    /// Built-in roles are refused with `AppError::Conflict`.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let repo = RoleRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::role::Column::Id).await? else {
            return Ok(false);
        };
        let existing = Role::from_entity(existing);
        if existing.is_built_in() {
            return Err(AppError::Conflict(format!(
                "Built-in role {} cannot be deleted",
                existing.name
            )));
        }

        let deleted = repo.delete(id, entity::role::Column::Id).await?;

        if deleted {
            self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;
        }

        Ok(deleted)
    }
}
