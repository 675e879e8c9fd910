use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::DeviceStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "monitoring_device")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub serial_number: String,
    pub model: String,
    pub manufacturer: Option<String>,
    pub status: DeviceStatus,
    pub patient_id: Option<Uuid>,
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
        on_delete = "SetNull"
    )]
    Patient,
    #[sea_orm(has_many = "super::biometric::Entity")]
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

crate::impl_soft_delete!(monitoring_device, unique = [SerialNumber]);
