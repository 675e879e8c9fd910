use super::*;

/// Expected: attach links once and a second attach reports no change
#[tokio::test]
async fn attaches_comorbidity_once() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let patient = factory::create_patient(db).await?;
    let comorbidity = factory::create_comorbidity(db).await?;
    let repo = PatientRepository::new(db);

    assert!(repo.attach_comorbidity(patient.id, comorbidity.id).await?);
    assert!(!repo.attach_comorbidity(patient.id, comorbidity.id).await?);

    let linked = repo.get_comorbidities(&patient).await?;
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, comorbidity.id);

    Ok(())
}

/// Expected: detach removes the link and reports false when nothing was linked
#[tokio::test]
async fn detaches_comorbidity() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let patient = factory::create_patient(db).await?;
    let comorbidity = factory::create_comorbidity(db).await?;
    let repo = PatientRepository::new(db);
    repo.attach_comorbidity(patient.id, comorbidity.id).await?;

    assert!(repo.detach_comorbidity(patient.id, comorbidity.id).await?);
    assert!(!repo.detach_comorbidity(patient.id, comorbidity.id).await?);
    assert!(repo.get_comorbidities(&patient).await?.is_empty());

    Ok(())
}

/// Expected: soft-deleted comorbidities are not listed
#[tokio::test]
async fn hides_deleted_comorbidities() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let patient = factory::create_patient(db).await?;
    let kept = factory::create_comorbidity(db).await?;
    let removed = factory::create_comorbidity(db).await?;
    let repo = PatientRepository::new(db);
    repo.attach_comorbidity(patient.id, kept.id).await?;
    repo.attach_comorbidity(patient.id, removed.id).await?;

    CrudRepository::<entity::prelude::Comorbidity, _>::new(db)
        .delete(removed.id, entity::comorbidity::Column::Id)
        .await?;

    let linked = repo.get_comorbidities(&patient).await?;
    assert_eq!(linked.iter().map(|c| c.id).collect::<Vec<_>>(), vec![kept.id]);

    Ok(())
}
