use super::*;

/// Expected: user and role returned together
#[tokio::test]
async fn finds_user_with_role() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let role = factory::create_role_named(db, "doctor").await?;
    let user = factory::user::UserFactory::new(db, role.id)
        .username("dr.grey")
        .build()
        .await?;

    let (found, found_role) = UserRepository::new(db)
        .find_by_username("dr.grey")
        .await?
        .expect("user should be found");

    assert_eq!(found.id, user.id);
    assert_eq!(found_role.map(|r| r.name), Some("doctor".to_string()));

    Ok(())
}

/// Expected: Ok(None) for unknown and soft-deleted users
#[tokio::test]
async fn skips_unknown_and_deleted_users() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let role = factory::create_role(db).await?;
    let user = factory::user::UserFactory::new(db, role.id)
        .username("former")
        .build()
        .await?;
    CrudRepository::<entity::prelude::User, _>::new(db)
        .delete(user.id, entity::user::Column::Id)
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.find_by_username("nobody").await?.is_none());
    assert!(repo.find_by_username("former").await?.is_none());

    Ok(())
}
