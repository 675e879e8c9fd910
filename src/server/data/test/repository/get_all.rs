use super::*;

/// Expected: live rows only, oldest first
#[tokio::test]
async fn returns_live_rows_in_creation_order() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = Roles::new(db);
    let now = Utc::now();
    let mut created = Vec::new();
    // Insert newest first so ordering cannot come from insertion order
    for (name, age) in [("third", 1), ("second", 2), ("first", 3)] {
        let mut model = role_model(name);
        model.created_at = ActiveValue::Set(now - chrono::Duration::minutes(age));
        created.push(repo.create(model).await?);
    }
    let (third, second, first) = (&created[0], &created[1], &created[2]);
    repo.delete(second.id, entity::role::Column::Id).await?;

    let all = repo.get_all().await?;

    let ids: Vec<Uuid> = all.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

/// Expected: empty vector when the table is empty
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    assert!(Roles::new(db).get_all().await?.is_empty());

    Ok(())
}
