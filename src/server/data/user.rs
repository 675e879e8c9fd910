//! User queries beyond plain CRUD.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

/// Repository for lookups that join users with their role.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a live user by username together with their role.
    ///
    /// # Returns
    /// - `Ok(Some((user, role)))` - User found; `role` is `None` only if it was removed
    /// - `Ok(None)` - No live user with that username
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(entity::user::Model, Option<entity::role::Model>)>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .filter(entity::user::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::Role)
            .one(self.db)
            .await
    }

    /// Finds a live user by ID together with their role.
    pub async fn find_with_role(
        &self,
        id: Uuid,
    ) -> Result<Option<(entity::user::Model, Option<entity::role::Model>)>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::Role)
            .one(self.db)
            .await
    }

    /// Gets every live user with their role, oldest first.
    pub async fn get_all_with_role(
        &self,
    ) -> Result<Vec<(entity::user::Model, Option<entity::role::Model>)>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::DeletedAt.is_null())
            .order_by_asc(entity::user::Column::CreatedAt)
            .find_also_related(entity::prelude::Role)
            .all(self.db)
            .await
    }

    /// Checks whether any live user holds the role named `role_name`.
    pub async fn exists_with_role(&self, role_name: &str) -> Result<bool, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::Role)
            .filter(entity::role::Column::Name.eq(role_name))
            .filter(entity::role::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(user.is_some())
    }
}
