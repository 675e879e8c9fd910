use super::*;
use crate::{
    model::patient::{CreatePatientDto, UpdatePatientDto},
    server::{
        model::patient::{CreatePatientParams, UpdatePatientParams},
        service::patient::PatientService,
    },
};

fn new_patient(dni: &str, doctor_id: Option<Uuid>) -> CreatePatientDto {
    CreatePatientDto {
        dni: dni.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Torres".to_string(),
        birth_date: None,
        gender: None,
        blood_type: Some("O+".to_string()),
        address: None,
        email: None,
        doctor_id,
    }
}

/// Expected: BadRequest when the attending doctor does not exist
#[tokio::test]
async fn create_rejects_unknown_doctor() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();

    let params = CreatePatientParams::from_dto(new_patient("X1234567", Some(Uuid::new_v4())))?;
    let result = PatientService::new(db, &cache).create(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: a duplicate DNI surfaces as a unique violation
#[tokio::test]
async fn create_rejects_duplicate_dni() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();
    let service = PatientService::new(db, &cache);

    service
        .create(CreatePatientParams::from_dto(new_patient("X1234567", None))?)
        .await?;
    let result = service
        .create(CreatePatientParams::from_dto(new_patient("X1234567", None))?)
        .await;

    match result {
        Err(AppError::DbErr(err)) => assert!(matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        )),
        other => panic!("expected unique violation, got {:?}", other.map(|p| p.id)),
    }

    Ok(())
}

/// Expected: a deleted patient's DNI can be registered again
#[tokio::test]
async fn deleted_patient_releases_dni() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();
    let service = PatientService::new(db, &cache);

    let first = service
        .create(CreatePatientParams::from_dto(new_patient("Z1112223", None))?)
        .await?;
    assert!(service.delete(first.id).await?);

    let second = service
        .create(CreatePatientParams::from_dto(new_patient("Z1112223", None))?)
        .await?;

    assert_ne!(second.id, first.id);
    assert!(service.get_by_id(first.id).await?.is_none());
    assert_eq!(service.get_by_id(second.id).await?.unwrap().dni, "Z1112223");

    Ok(())
}

/// Expected: omitted fields keep their stored values
#[tokio::test]
async fn update_is_partial() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();
    let service = PatientService::new(db, &cache);

    let doctor = factory::create_doctor(db).await?;
    let patient = service
        .create(CreatePatientParams::from_dto(new_patient(
            "Y7654321",
            Some(doctor.id),
        ))?)
        .await?;

    let params = UpdatePatientParams::from_dto(UpdatePatientDto {
        address: Some("Calle Mayor 1".to_string()),
        ..Default::default()
    })?;
    let updated = service.update(patient.id, params).await?.unwrap();

    assert_eq!(updated.address.as_deref(), Some("Calle Mayor 1"));
    assert_eq!(updated.blood_type.as_deref(), Some("O+"));
    assert_eq!(updated.doctor_id, Some(doctor.id));
    assert_eq!(updated.dni, "Y7654321");

    Ok(())
}

/// Expected: NotFound for a missing comorbidity; repeated attach succeeds
#[tokio::test]
async fn attaches_comorbidities() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();
    let service = PatientService::new(db, &cache);

    let patient = factory::create_patient(db).await?;
    let comorbidity = factory::create_comorbidity(db).await?;

    let missing = service
        .attach_comorbidity(patient.id, Uuid::new_v4())
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    service.attach_comorbidity(patient.id, comorbidity.id).await?;
    service.attach_comorbidity(patient.id, comorbidity.id).await?;

    let linked = service.get_comorbidities(patient.id).await?.unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, comorbidity.id);

    Ok(())
}

/// Expected: detaching something never linked is NotFound
#[tokio::test]
async fn detach_requires_link() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();
    let service = PatientService::new(db, &cache);

    let patient = factory::create_patient(db).await?;
    let medication = factory::create_medication(db).await?;

    let result = service.detach_medication(patient.id, medication.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    service.attach_medication(patient.id, medication.id).await?;
    service.detach_medication(patient.id, medication.id).await?;
    assert!(service.get_medications(patient.id).await?.unwrap().is_empty());

    Ok(())
}

/// Expected: listings return None for a deleted patient
#[tokio::test]
async fn listings_require_live_patient() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();
    let service = PatientService::new(db, &cache);

    let patient = factory::create_patient(db).await?;
    factory::create_biometric(db, patient.id).await?;
    factory::create_alert(db, patient.id).await?;

    assert_eq!(service.get_biometrics(patient.id).await?.unwrap().len(), 1);
    assert_eq!(service.get_alerts(patient.id).await?.unwrap().len(), 1);

    assert!(service.delete(patient.id).await?);

    assert!(service.get_biometrics(patient.id).await?.is_none());
    assert!(service.get_alerts(patient.id).await?.is_none());
    assert!(service.get_comorbidities(patient.id).await?.is_none());

    Ok(())
}
