use super::*;

/// Expected: readings most recent first, excluding other patients
#[tokio::test]
async fn lists_biometrics_newest_first() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let patient = factory::create_patient(db).await?;
    let other = factory::create_patient(db).await?;
    let now = Utc::now();

    let older = factory::biometric::BiometricFactory::new(db, patient.id)
        .recorded_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::biometric::BiometricFactory::new(db, patient.id)
        .recorded_at(now - Duration::minutes(5))
        .build()
        .await?;
    factory::create_biometric(db, other.id).await?;

    let readings = PatientRepository::new(db).get_biometrics(patient.id).await?;

    let ids: Vec<_> = readings.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Expected: only live alerts of the patient are listed
#[tokio::test]
async fn lists_live_alerts() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let patient = factory::create_patient(db).await?;
    let kept = factory::create_alert(db, patient.id).await?;
    let removed = factory::create_alert(db, patient.id).await?;
    CrudRepository::<entity::prelude::Alert, _>::new(db)
        .delete(removed.id, entity::alert::Column::Id)
        .await?;

    let alerts = PatientRepository::new(db).get_alerts(patient.id).await?;

    assert_eq!(alerts.iter().map(|a| a.id).collect::<Vec<_>>(), vec![kept.id]);

    Ok(())
}
