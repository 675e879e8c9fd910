use chrono::Utc;
use entity::sea_orm_active_enums::AlertSeverity;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates an unacknowledged high-severity alert for a patient.
pub async fn create_alert(
    db: &DatabaseConnection,
    patient_id: Uuid,
) -> Result<entity::alert::Model, DbErr> {
    let now = Utc::now();
    entity::alert::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        patient_id: ActiveValue::Set(patient_id),
        biometric_id: ActiveValue::Set(None),
        alert_type: ActiveValue::Set("tachycardia".to_string()),
        severity: ActiveValue::Set(AlertSeverity::High),
        message: ActiveValue::Set("Heart rate above 130 bpm".to_string()),
        acknowledged: ActiveValue::Set(false),
        acknowledged_by: ActiveValue::Set(None),
        acknowledged_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
