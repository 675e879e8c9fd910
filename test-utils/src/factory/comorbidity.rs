use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a comorbidity with a unique generated name.
pub async fn create_comorbidity(
    db: &DatabaseConnection,
) -> Result<entity::comorbidity::Model, DbErr> {
    let now = Utc::now();
    entity::comorbidity::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(format!("Comorbidity {}", next_id())),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
