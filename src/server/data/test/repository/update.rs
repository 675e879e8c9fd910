use super::*;

/// Expected: only the changed column is written
#[tokio::test]
async fn writes_changed_columns() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let role = factory::create_role(db).await?;

    let mut model: entity::role::ActiveModel = role.clone().into();
    model.description = ActiveValue::Set(Some("Night shift".to_string()));
    let updated = Roles::new(db).update(model).await?;

    assert_eq!(updated.name, role.name);
    assert_eq!(updated.description.as_deref(), Some("Night shift"));

    Ok(())
}
