//! Patient queries beyond plain CRUD: associations and per-patient listings.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct PatientRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PatientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the live comorbidities linked to a patient, by name.
    pub async fn get_comorbidities(
        &self,
        patient: &entity::patient::Model,
    ) -> Result<Vec<entity::comorbidity::Model>, DbErr> {
        patient
            .find_related(entity::prelude::Comorbidity)
            .filter(entity::comorbidity::Column::DeletedAt.is_null())
            .order_by_asc(entity::comorbidity::Column::Name)
            .all(self.db)
            .await
    }

    /// Links a comorbidity to a patient.
    ///
    /// # Returns
    /// - `Ok(true)` - Link created
    /// - `Ok(false)` - Link already existed, nothing written
    pub async fn attach_comorbidity(
        &self,
        patient_id: Uuid,
        comorbidity_id: Uuid,
    ) -> Result<bool, DbErr> {
        let existing = entity::prelude::PatientComorbidity::find_by_id((patient_id, comorbidity_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::patient_comorbidity::ActiveModel {
            patient_id: ActiveValue::Set(patient_id),
            comorbidity_id: ActiveValue::Set(comorbidity_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes the link between a patient and a comorbidity.
    ///
    /// # Returns
    /// - `Ok(true)` - Link removed
    /// - `Ok(false)` - No such link
    pub async fn detach_comorbidity(
        &self,
        patient_id: Uuid,
        comorbidity_id: Uuid,
    ) -> Result<bool, DbErr> {
        let result =
            entity::prelude::PatientComorbidity::delete_by_id((patient_id, comorbidity_id))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the live medications linked to a patient, by name.
    pub async fn get_medications(
        &self,
        patient: &entity::patient::Model,
    ) -> Result<Vec<entity::medication::Model>, DbErr> {
        patient
            .find_related(entity::prelude::Medication)
            .filter(entity::medication::Column::DeletedAt.is_null())
            .order_by_asc(entity::medication::Column::Name)
            .all(self.db)
            .await
    }

    /// Links a medication to a patient. Returns `false` if the link already existed.
    pub async fn attach_medication(
        &self,
        patient_id: Uuid,
        medication_id: Uuid,
    ) -> Result<bool, DbErr> {
        let existing = entity::prelude::PatientMedication::find_by_id((patient_id, medication_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::patient_medication::ActiveModel {
            patient_id: ActiveValue::Set(patient_id),
            medication_id: ActiveValue::Set(medication_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes the link between a patient and a medication. Returns `false` if absent.
    pub async fn detach_medication(
        &self,
        patient_id: Uuid,
        medication_id: Uuid,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::PatientMedication::delete_by_id((patient_id, medication_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a patient's live readings, most recent first.
    pub async fn get_biometrics(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<entity::biometric::Model>, DbErr> {
        entity::prelude::Biometric::find()
            .filter(entity::biometric::Column::PatientId.eq(patient_id))
            .filter(entity::biometric::Column::DeletedAt.is_null())
            .order_by_desc(entity::biometric::Column::RecordedAt)
            .all(self.db)
            .await
    }

    /// Gets a patient's live alerts, most recent first.
    pub async fn get_alerts(&self, patient_id: Uuid) -> Result<Vec<entity::alert::Model>, DbErr> {
        entity::prelude::Alert::find()
            .filter(entity::alert::Column::PatientId.eq(patient_id))
            .filter(entity::alert::Column::DeletedAt.is_null())
            .order_by_desc(entity::alert::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
