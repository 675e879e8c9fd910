use sea_orm::entity::prelude::*;

/// A single set of vital-sign readings for a patient.
///
/// Every measurement is optional since devices report different subsets.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "biometric")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub patient_id: Uuid,
    pub device_id: Option<Uuid>,
    pub heart_rate: Option<i32>,
    pub systolic_pressure: Option<i32>,
    pub diastolic_pressure: Option<i32>,
    pub temperature: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub respiratory_rate: Option<i32>,
    pub glucose_level: Option<f64>,
    pub recorded_at: DateTimeUtc,
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
        belongs_to = "super::monitoring_device::Entity",
        from = "Column::DeviceId",
        to = "super::monitoring_device::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    MonitoringDevice,
    #[sea_orm(has_many = "super::alert::Entity")]
    Alert,
    #[sea_orm(has_many = "super::computer_diagnosis::Entity")]
    ComputerDiagnosis,
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl Related<super::monitoring_device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonitoringDevice.def()
    }
}

impl Related<super::alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alert.def()
    }
}

impl Related<super::computer_diagnosis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComputerDiagnosis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_soft_delete!(biometric);
