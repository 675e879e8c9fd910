use super::*;

/// Expected: Ok(Some) for a live row
#[tokio::test]
async fn finds_live_row() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let role = factory::create_role(db).await?;

    let found = Roles::new(db)
        .get_by_id(role.id, entity::role::Column::Id)
        .await?;

    assert_eq!(found.map(|r| r.id), Some(role.id));

    Ok(())
}

/// Expected: Ok(None) for an unknown ID
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let found = Roles::new(db)
        .get_by_id(Uuid::new_v4(), entity::role::Column::Id)
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Expected: Ok(None) once the row is soft-deleted
#[tokio::test]
async fn hides_soft_deleted_row() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let role = factory::create_role(db).await?;
    let repo = Roles::new(db);
    repo.delete(role.id, entity::role::Column::Id).await?;

    assert!(repo
        .get_by_id(role.id, entity::role::Column::Id)
        .await?
        .is_none());
    assert!(!repo.exists(role.id, entity::role::Column::Id).await?);

    Ok(())
}

/// Expected: find_one_by matches on an arbitrary column
#[tokio::test]
async fn finds_one_by_column() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let role = factory::create_role_named(db, "nurse").await?;

    let found = Roles::new(db)
        .find_one_by(entity::role::Column::Name, "nurse")
        .await?;

    assert_eq!(found.map(|r| r.id), Some(role.id));

    Ok(())
}
