//! Role factory for creating test role entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a role with a unique generated name.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    create_role_named(db, &format!("role-{}", next_id())).await
}

/// Creates a role with the given name.
///
/// # Example
///
/// ```rust,ignore
/// let admin = create_role_named(&db, "admin").await?;
/// ```
pub async fn create_role_named(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::role::Model, DbErr> {
    let now = Utc::now();
    entity::role::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_roles_with_unique_names() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Role).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_role(db).await?;
        let second = create_role(db).await?;

        assert_ne!(first.name, second.name);
        assert!(first.deleted_at.is_none());

        Ok(())
    }
}
