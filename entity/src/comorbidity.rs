use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comorbidity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        super::patient_comorbidity::Relation::Patient.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::patient_comorbidity::Relation::Comorbidity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_soft_delete!(comorbidity, unique = [Name]);
