//! Service layer for business logic.
//!
//! Services sit between controllers and repositories. Each one validates references
//! to other rows, maps parameters to active models, calls the repositories and converts
//! the results into domain models. Single-entity reads go through the cache and writes
//! invalidate it.
//!
//! Services return `Option` for lookups and `bool` for deletes; controllers decide
//! which HTTP status that maps to.

pub mod alert;
pub mod auth;
pub mod biometric;
pub mod comorbidity;
pub mod computer_diagnosis;
pub mod doctor;
pub mod medication;
pub mod monitoring_device;
pub mod patient;
pub mod phone;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;

use entity::soft_delete::SoftDelete;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, IntoActiveModel};
use uuid::Uuid;

use crate::server::{data::repository::CrudRepository, error::AppError};

/// Checks that a row referenced from a request body exists.
///
/// # Arguments
/// - `db` - Connection to check on
/// - `id` - Referenced key; `None` passes
/// - `primary_key` - Primary key column of the referenced entity
/// - `label` - Name used in the error message
///
/// # Returns
/// - `Ok(())` - No reference, or the referenced row is live
/// - `Err(AppError::BadRequest)` - Referenced row missing or soft-deleted
pub(crate) async fn ensure_exists<E, C>(
    db: &C,
    id: Option<Uuid>,
    primary_key: E::Column,
    label: &str,
) -> Result<(), AppError>
where
    E: SoftDelete,
    C: ConnectionTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    let Some(id) = id else {
        return Ok(());
    };

    if CrudRepository::<E, C>::new(db).exists(id, primary_key).await? {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("{} {} does not exist", label, id)))
    }
}
