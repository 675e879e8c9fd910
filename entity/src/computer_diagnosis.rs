use sea_orm::entity::prelude::*;

/// Diagnosis suggested by an automated model from a patient's readings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "computer_diagnosis")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub patient_id: Uuid,
    pub biometric_id: Option<Uuid>,
    pub diagnosis: String,
    pub confidence: Option<f64>,
    pub model_version: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::PatientId",
        to = "super::patient::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Patient,
    #[sea_orm(
        belongs_to = "super::biometric::Entity",
        from = "Column::BiometricId",
        to = "super::biometric::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Biometric,
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl Related<super::biometric::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Biometric.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_soft_delete!(computer_diagnosis);
