use super::*;
use crate::{
    model::biometric::{CreateBiometricDto, UpdateBiometricDto},
    server::{
        model::biometric::{CreateBiometricParams, UpdateBiometricParams},
        service::biometric::BiometricService,
    },
};

fn reading(patient_id: Uuid) -> CreateBiometricDto {
    CreateBiometricDto {
        patient_id,
        device_id: None,
        heart_rate: Some(72),
        systolic_pressure: Some(118),
        diastolic_pressure: Some(76),
        temperature: Some(36.6),
        oxygen_saturation: Some(97.5),
        respiratory_rate: Some(15),
        glucose_level: None,
        recorded_at: None,
    }
}

/// Expected: reading stored with its device and patient
#[tokio::test]
async fn records_reading() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();

    let patient = factory::create_patient(db).await?;
    let device = factory::create_device(db).await?;

    let params = CreateBiometricParams::from_dto(CreateBiometricDto {
        device_id: Some(device.id),
        ..reading(patient.id)
    })?;
    let stored = BiometricService::new(db, &cache).create(params).await?;

    assert_eq!(stored.patient_id, patient.id);
    assert_eq!(stored.device_id, Some(device.id));
    assert_eq!(stored.heart_rate, Some(72));

    Ok(())
}

/// Expected: BadRequest for an unknown device
#[tokio::test]
async fn rejects_unknown_device() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();

    let patient = factory::create_patient(db).await?;

    let params = CreateBiometricParams::from_dto(CreateBiometricDto {
        device_id: Some(Uuid::new_v4()),
        ..reading(patient.id)
    })?;
    let result = BiometricService::new(db, &cache).create(params).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("monitoring device")),
        other => panic!("expected BadRequest, got {:?}", other.map(|b| b.id)),
    }

    Ok(())
}

/// Expected: BadRequest for out-of-range or missing vitals before touching the database
#[test]
fn validates_vitals() {
    let patient_id = Uuid::new_v4();

    let too_fast = CreateBiometricParams::from_dto(CreateBiometricDto {
        heart_rate: Some(400),
        ..reading(patient_id)
    });
    assert!(matches!(too_fast, Err(AppError::BadRequest(msg)) if msg.contains("heart_rate")));

    let cold = CreateBiometricParams::from_dto(CreateBiometricDto {
        temperature: Some(12.0),
        ..reading(patient_id)
    });
    assert!(matches!(cold, Err(AppError::BadRequest(_))));

    let empty = CreateBiometricParams::from_dto(CreateBiometricDto {
        patient_id,
        device_id: None,
        heart_rate: None,
        systolic_pressure: None,
        diastolic_pressure: None,
        temperature: None,
        oxygen_saturation: None,
        respiratory_rate: None,
        glucose_level: None,
        recorded_at: None,
    });
    assert!(matches!(empty, Err(AppError::BadRequest(_))));
}

/// Expected: partial update leaves the other vitals alone; delete hides the reading
#[tokio::test]
async fn updates_and_deletes_reading() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();

    let (_, _, biometric) = factory::helpers::create_reading_with_dependencies(db).await?;
    let service = BiometricService::new(db, &cache);

    let params = UpdateBiometricParams::from_dto(UpdateBiometricDto {
        oxygen_saturation: Some(91.0),
        ..Default::default()
    })?;
    let updated = service.update(biometric.id, params).await?.unwrap();

    assert_eq!(updated.oxygen_saturation, Some(91.0));
    assert_eq!(updated.heart_rate, biometric.heart_rate);
    assert_eq!(updated.device_id, biometric.device_id);

    assert!(service.delete(biometric.id).await?);
    assert!(service.get_by_id(biometric.id).await?.is_none());
    assert!(!service.delete(biometric.id).await?);

    Ok(())
}
