use super::*;

/// Expected: Ok(true) and the row keeps existing with deleted_at set
#[tokio::test]
async fn soft_deletes_row() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let role = factory::create_role(db).await?;

    let deleted = Roles::new(db)
        .delete(role.id, entity::role::Column::Id)
        .await?;
    assert!(deleted);

    let stored = entity::prelude::Role::find_by_id(role.id)
        .one(db)
        .await?
        .expect("row should still exist");
    assert!(stored.deleted_at.is_some());

    Ok(())
}

/// Expected: Ok(false) for a second delete and for unknown IDs
#[tokio::test]
async fn returns_false_when_nothing_deleted() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let role = factory::create_role(db).await?;
    let repo = Roles::new(db);

    assert!(repo.delete(role.id, entity::role::Column::Id).await?);
    assert!(!repo.delete(role.id, entity::role::Column::Id).await?);
    assert!(!repo.delete(Uuid::new_v4(), entity::role::Column::Id).await?);

    Ok(())
}
