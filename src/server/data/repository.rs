//! Generic CRUD repository shared by every soft-deletable entity.
//!
//! `CrudRepository` works over any connection implementing `ConnectionTrait`, so the
//! same code runs on the pool or inside an open `DatabaseTransaction`. Rows whose
//! `deleted_at` is set are excluded from every read and cannot be updated or deleted
//! again.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use entity::soft_delete::SoftDelete;
use sea_orm::{
    sea_query::Expr, ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr,
    IntoActiveModel, QueryFilter, QueryOrder, Value,
};
use uuid::Uuid;

/// Repository providing create, read, update and soft delete for entity `E`.
///
/// # Example
///
/// ```rust,ignore
/// let repo = CrudRepository::<entity::prelude::Patient, _>::new(&db);
/// let patient = repo.get_by_id(id, entity::patient::Column::Id).await?;
/// ```
pub struct CrudRepository<'a, E, C> {
    db: &'a C,
    _entity: PhantomData<E>,
}

impl<'a, E, C> CrudRepository<'a, E, C>
where
    E: SoftDelete,
    C: ConnectionTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Pooled connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Inserts a row and returns the stored model.
    pub async fn create(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        model.insert(self.db).await
    }

    /// Gets a live row by its primary key.
    ///
    /// # Arguments
    /// - `id` - Primary key value
    /// - `primary_key` - Column holding the primary key
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Row found and not soft-deleted
    /// - `Ok(None)` - No live row with that key
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(
        &self,
        id: Uuid,
        primary_key: E::Column,
    ) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(primary_key.eq(id))
            .filter(E::deleted_at_column().is_null())
            .one(self.db)
            .await
    }

    /// Gets the first live row whose `column` equals `value`.
    ///
    /// Meant for columns with a unique constraint such as usernames or DNIs.
    pub async fn find_one_by<V>(
        &self,
        column: E::Column,
        value: V,
    ) -> Result<Option<E::Model>, DbErr>
    where
        V: Into<Value>,
    {
        E::find()
            .filter(column.eq(value))
            .filter(E::deleted_at_column().is_null())
            .one(self.db)
            .await
    }

    /// Gets every live row, oldest first.
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find()
            .filter(E::deleted_at_column().is_null())
            .order_by_asc(E::created_at_column())
            .all(self.db)
            .await
    }

    /// Writes the changed columns of an active model.
    ///
    /// Callers load the row with `get_by_id` first, so soft-deleted rows never reach
    /// this point.
    pub async fn update(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        model.update(self.db).await
    }

    /// Soft deletes a row by stamping `deleted_at`.
    ///
    /// # Returns
    /// - `Ok(true)` - A live row was marked deleted
    /// - `Ok(false)` - No live row with that key
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: Uuid, primary_key: E::Column) -> Result<bool, DbErr> {
        let result = E::update_many()
            .col_expr(E::deleted_at_column(), Expr::value(Utc::now()))
            .filter(primary_key.eq(id))
            .filter(E::deleted_at_column().is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the most recently soft-deleted row whose `column` equals `value`.
    ///
    /// Used to bring back rows that must always exist, such as the built-in roles.
    pub async fn find_deleted_by<V>(
        &self,
        column: E::Column,
        value: V,
    ) -> Result<Option<E::Model>, DbErr>
    where
        V: Into<Value>,
    {
        E::find()
            .filter(column.eq(value))
            .filter(E::deleted_at_column().is_not_null())
            .order_by_desc(E::deleted_at_column())
            .one(self.db)
            .await
    }

    /// Clears `deleted_at` on a soft-deleted row.
    ///
    /// # Returns
    /// - `Ok(true)` - The row is live again
    /// - `Ok(false)` - No soft-deleted row with that key
    /// - `Err(DbErr)` - Database error, including a unique clash with a live row
    pub async fn restore(&self, id: Uuid, primary_key: E::Column) -> Result<bool, DbErr> {
        let result = E::update_many()
            .col_expr(
                E::deleted_at_column(),
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(primary_key.eq(id))
            .filter(E::deleted_at_column().is_not_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns whether a live row with the key exists.
    pub async fn exists(&self, id: Uuid, primary_key: E::Column) -> Result<bool, DbErr> {
        Ok(self.get_by_id(id, primary_key).await?.is_some())
    }
}
