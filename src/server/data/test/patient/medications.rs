use super::*;

/// Expected: linked medications are listed for their patient only
#[tokio::test]
async fn lists_medications_per_patient() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let patient = factory::create_patient(db).await?;
    let other = factory::create_patient(db).await?;
    let medication = factory::create_medication(db).await?;
    let repo = PatientRepository::new(db);

    assert!(repo.attach_medication(patient.id, medication.id).await?);

    assert_eq!(repo.get_medications(&patient).await?.len(), 1);
    assert!(repo.get_medications(&other).await?.is_empty());

    assert!(repo.detach_medication(patient.id, medication.id).await?);
    assert!(repo.get_medications(&patient).await?.is_empty());

    Ok(())
}
