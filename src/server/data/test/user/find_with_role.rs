use super::*;

/// Expected: Ok(Some) with the role for a live user
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (role, user) = factory::helpers::create_user_with_role(db, "nurse").await?;

    let found = UserRepository::new(db).find_with_role(user.id).await?;

    let (found, found_role) = found.expect("user should be found");
    assert_eq!(found.id, user.id);
    assert_eq!(found_role.map(|r| r.id), Some(role.id));

    Ok(())
}

/// Expected: every live user listed with its role, oldest first
#[tokio::test]
async fn lists_users_with_roles() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let role = factory::create_role(db).await?;
    factory::create_user(db, role.id).await?;
    factory::create_user(db, role.id).await?;

    let all = UserRepository::new(db).get_all_with_role().await?;

    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|(_, r)| r.as_ref().map(|r| r.id) == Some(role.id)));

    Ok(())
}
