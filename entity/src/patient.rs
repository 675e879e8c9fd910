use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patient")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub dni: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<Date>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub doctor_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doctor::Entity",
        from = "Column::DoctorId",
        to = "super::doctor::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Doctor,
    #[sea_orm(has_many = "super::biometric::Entity")]
    Biometric,
    #[sea_orm(has_many = "super::alert::Entity")]
    Alert,
    #[sea_orm(has_many = "super::phone::Entity")]
    Phone,
    #[sea_orm(has_many = "super::monitoring_device::Entity")]
    MonitoringDevice,
    #[sea_orm(has_many = "super::computer_diagnosis::Entity")]
    ComputerDiagnosis,
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl Related<super::biometric::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Biometric.def()
    }
}

impl Related<super::alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alert.def()
    }
}

impl Related<super::phone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Phone.def()
    }
}

impl Related<super::monitoring_device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonitoringDevice.def()
    }
}

impl Related<super::computer_diagnosis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComputerDiagnosis.def()
    }
}

impl Related<super::comorbidity::Entity> for Entity {
    fn to() -> RelationDef {
        super::patient_comorbidity::Relation::Comorbidity.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::patient_comorbidity::Relation::Patient.def().rev())
    }
}

impl Related<super::medication::Entity> for Entity {
    fn to() -> RelationDef {
        super::patient_medication::Relation::Medication.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::patient_medication::Relation::Patient.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_soft_delete!(patient, unique = [Dni]);
