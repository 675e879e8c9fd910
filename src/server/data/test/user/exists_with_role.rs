use super::*;

/// Expected: true only when a live user holds the role
#[tokio::test]
async fn detects_role_holder() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.exists_with_role("admin").await?);

    let (_, admin) = factory::helpers::create_user_with_role(db, "admin").await?;
    factory::helpers::create_user_with_role(db, "nurse").await?;
    assert!(repo.exists_with_role("admin").await?);

    CrudRepository::<entity::prelude::User, _>::new(db)
        .delete(admin.id, entity::user::Column::Id)
        .await?;
    assert!(!repo.exists_with_role("admin").await?);

    Ok(())
}
