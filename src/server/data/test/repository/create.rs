use super::*;

/// Expected: Ok with the inserted row returned
#[tokio::test]
async fn creates_row() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let role = Roles::new(db).create(role_model("auditor")).await?;

    assert_eq!(role.name, "auditor");
    assert!(role.deleted_at.is_none());

    let stored = entity::prelude::Role::find_by_id(role.id).one(db).await?;
    assert_eq!(stored, Some(role));

    Ok(())
}

/// Expected: Err for a name that is already taken
#[tokio::test]
async fn fails_on_unique_violation() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = Roles::new(db);
    repo.create(role_model("auditor")).await?;
    let result = repo.create(role_model("auditor")).await;

    assert!(result.is_err());

    Ok(())
}
