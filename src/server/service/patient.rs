//! Patient management, associations and per-patient listings.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    data::{patient::PatientRepository, repository::CrudRepository},
    error::AppError,
    model::{
        alert::Alert,
        biometric::Biometric,
        comorbidity::Comorbidity,
        medication::Medication,
        patient::{CreatePatientParams, Patient, UpdatePatientParams},
    },
    service::ensure_exists,
};

const CACHE_PREFIX: &str = "patient";

type Patients<'a> = CrudRepository<'a, entity::prelude::Patient, DatabaseConnection>;

pub struct PatientService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
}

impl<'a> PatientService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache) -> Self {
        Self { db, cache }
    }

    /// Creates a patient, checking the attending doctor exists.
    pub async fn create(&self, params: CreatePatientParams) -> Result<Patient, AppError> {
        ensure_exists::<entity::prelude::Doctor, _>(
            self.db,
            params.doctor_id,
            entity::doctor::Column::Id,
            "doctor",
        )
        .await?;

        let patient = Patients::new(self.db)
            .create(params.into_active_model())
            .await?;

        Ok(Patient::from_entity(patient))
    }

    /// Gets a patient by ID, consulting the cache first.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Patient>, AppError> {
        let key = Cache::key(CACHE_PREFIX, id);
        if let Some(patient) = self.cache.get::<Patient>(&key).await {
            return Ok(Some(patient));
        }

        let patient = Patients::new(self.db)
            .get_by_id(id, entity::patient::Column::Id)
            .await?
            .map(Patient::from_entity);

        if let Some(patient) = &patient {
            self.cache.set(&key, patient).await;
        }

        Ok(patient)
    }

    pub async fn get_all(&self) -> Result<Vec<Patient>, AppError> {
        let patients = Patients::new(self.db).get_all().await?;

        Ok(patients.into_iter().map(Patient::from_entity).collect())
    }

    /// Updates the provided fields of a patient.
    /// Returns None if the patient doesn't exist
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdatePatientParams,
    ) -> Result<Option<Patient>, AppError> {
        let repo = Patients::new(self.db);

        let Some(existing) = repo.get_by_id(id, entity::patient::Column::Id).await? else {
            return Ok(None);
        };

        ensure_exists::<entity::prelude::Doctor, _>(
            self.db,
            params.doctor_id,
            entity::doctor::Column::Id,
            "doctor",
        )
        .await?;

        let patient = repo.update(params.apply(existing)).await?;
        self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;

        Ok(Some(Patient::from_entity(patient)))
    }

    /// Soft deletes a patient
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted = Patients::new(self.db)
            .delete(id, entity::patient::Column::Id)
            .await?;

        if deleted {
            self.cache.invalidate(&Cache::key(CACHE_PREFIX, id)).await;
        }

        Ok(deleted)
    }

    /// Lists a patient's comorbidities.
    /// Returns None if the patient doesn't exist
    pub async fn get_comorbidities(
        &self,
        patient_id: Uuid,
    ) -> Result<Option<Vec<Comorbidity>>, AppError> {
        let Some(patient) = self.find_live(patient_id).await? else {
            return Ok(None);
        };

        let comorbidities = PatientRepository::new(self.db)
            .get_comorbidities(&patient)
            .await?;

        Ok(Some(
            comorbidities
                .into_iter()
                .map(Comorbidity::from_entity)
                .collect(),
        ))
    }

    /// Links a comorbidity to a patient. Linking twice is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Link exists after the call
    /// - `Err(AppError::NotFound)` - Patient or comorbidity missing
    pub async fn attach_comorbidity(
        &self,
        patient_id: Uuid,
        comorbidity_id: Uuid,
    ) -> Result<(), AppError> {
        self.require_patient(patient_id).await?;

        let comorbidity = CrudRepository::<entity::prelude::Comorbidity, _>::new(self.db)
            .exists(comorbidity_id, entity::comorbidity::Column::Id)
            .await?;
        if !comorbidity {
            return Err(AppError::NotFound("Comorbidity not found".to_string()));
        }

        PatientRepository::new(self.db)
            .attach_comorbidity(patient_id, comorbidity_id)
            .await?;

        Ok(())
    }

    /// Removes the link between a patient and a comorbidity.
    pub async fn detach_comorbidity(
        &self,
        patient_id: Uuid,
        comorbidity_id: Uuid,
    ) -> Result<(), AppError> {
        self.require_patient(patient_id).await?;

        let removed = PatientRepository::new(self.db)
            .detach_comorbidity(patient_id, comorbidity_id)
            .await?;
        if !removed {
            return Err(AppError::NotFound(
                "Comorbidity is not linked to this patient".to_string(),
            ));
        }

        Ok(())
    }

    /// Lists a patient's medications.
    /// Returns None if the patient doesn't exist
    pub async fn get_medications(
        &self,
        patient_id: Uuid,
    ) -> Result<Option<Vec<Medication>>, AppError> {
        let Some(patient) = self.find_live(patient_id).await? else {
            return Ok(None);
        };

        let medications = PatientRepository::new(self.db)
            .get_medications(&patient)
            .await?;

        Ok(Some(
            medications
                .into_iter()
                .map(Medication::from_entity)
                .collect(),
        ))
    }

    /// Links a medication to a patient. Linking twice is a no-op.
    pub async fn attach_medication(
        &self,
        patient_id: Uuid,
        medication_id: Uuid,
    ) -> Result<(), AppError> {
        self.require_patient(patient_id).await?;

        let medication = CrudRepository::<entity::prelude::Medication, _>::new(self.db)
            .exists(medication_id, entity::medication::Column::Id)
            .await?;
        if !medication {
            return Err(AppError::NotFound("Medication not found".to_string()));
        }

        PatientRepository::new(self.db)
            .attach_medication(patient_id, medication_id)
            .await?;

        Ok(())
    }

    pub async fn detach_medication(
        &self,
        patient_id: Uuid,
        medication_id: Uuid,
    ) -> Result<(), AppError> {
        self.require_patient(patient_id).await?;

        let removed = PatientRepository::new(self.db)
            .detach_medication(patient_id, medication_id)
            .await?;
        if !removed {
            return Err(AppError::NotFound(
                "Medication is not linked to this patient".to_string(),
            ));
        }

        Ok(())
    }

    /// Lists a patient's readings, most recent first.
    /// Returns None if the patient doesn't exist
    pub async fn get_biometrics(
        &self,
        patient_id: Uuid,
    ) -> Result<Option<Vec<Biometric>>, AppError> {
        if self.find_live(patient_id).await?.is_none() {
            return Ok(None);
        }

        let readings = PatientRepository::new(self.db)
            .get_biometrics(patient_id)
            .await?;

        Ok(Some(
            readings.into_iter().map(Biometric::from_entity).collect(),
        ))
    }

    /// Lists a patient's alerts, most recent first.
    /// Returns None if the patient doesn't exist
    pub async fn get_alerts(&self, patient_id: Uuid) -> Result<Option<Vec<Alert>>, AppError> {
        if self.find_live(patient_id).await?.is_none() {
            return Ok(None);
        }

        let alerts = PatientRepository::new(self.db).get_alerts(patient_id).await?;

        Ok(Some(alerts.into_iter().map(Alert::from_entity).collect()))
    }

    async fn find_live(&self, id: Uuid) -> Result<Option<entity::patient::Model>, AppError> {
        Ok(Patients::new(self.db)
            .get_by_id(id, entity::patient::Column::Id)
            .await?)
    }

    async fn require_patient(&self, id: Uuid) -> Result<(), AppError> {
        match self.find_live(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Patient not found".to_string())),
        }
    }
}
