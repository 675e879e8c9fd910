use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a medication with a generated name and a fixed dosage.
pub async fn create_medication(
    db: &DatabaseConnection,
) -> Result<entity::medication::Model, DbErr> {
    let now = Utc::now();
    entity::medication::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(format!("Medication {}", next_id())),
        dosage: ActiveValue::Set(Some("10mg".to_string())),
        frequency: ActiveValue::Set(Some("daily".to_string())),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
