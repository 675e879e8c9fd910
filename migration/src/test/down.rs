use super::*;

/// Tests rolling back all applied migrations.
///
/// Verifies that down files run newest first (the user table references role,
/// so it has to go first) and that the bookkeeping rows are removed.
///
/// Expected: Ok with migrations rolled back in reverse order and no tables left
#[tokio::test]
async fn rolls_back_in_reverse_order() -> Result<(), MigrationError> {
    let dir = migrations_dir(&[
        ("20240101000000_create_role.sql", CREATE_ROLE),
        ("20240101000000_create_role_down.sql", DROP_ROLE),
        ("20240102000000_create_user.sql", CREATE_USER),
        ("20240102000000_create_user_down.sql", DROP_USER),
    ]);
    let db = sqlite().await?;
    let migrator = migrator(&db, dir.path());
    migrator.up().await?;

    let rolled_back = migrator.down().await?;

    assert_eq!(
        rolled_back,
        vec!["20240102000000_create_user.sql", "20240101000000_create_role.sql"]
    );
    assert!(migrator.applied().await?.is_empty());
    assert!(!table_exists(&db, "role").await?);
    assert!(!table_exists(&db, "user").await?);

    Ok(())
}

/// Tests rolling back when a down file is missing.
///
/// Verifies that the rollback stops at the migration without a down file and
/// that its record is kept.
///
/// Expected: Err(MigrationError::MissingDownFile)
#[tokio::test]
async fn fails_without_down_file() -> Result<(), MigrationError> {
    let dir = migrations_dir(&[("20240101000000_create_role.sql", CREATE_ROLE)]);
    let db = sqlite().await?;
    let migrator = migrator(&db, dir.path());
    migrator.up().await?;

    let result = migrator.down().await;

    match result {
        Err(MigrationError::MissingDownFile(name)) => {
            assert_eq!(name, "20240101000000_create_role.sql")
        }
        other => panic!("expected a missing down file, got {:?}", other),
    }
    assert_eq!(migrator.applied().await?.len(), 1);

    Ok(())
}

/// Tests reset, which rolls everything back and applies it again.
///
/// Expected: Ok with every migration re-applied and tables present
#[tokio::test]
async fn reset_reapplies_everything() -> Result<(), MigrationError> {
    let dir = migrations_dir(&[
        ("20240101000000_create_role.sql", CREATE_ROLE),
        ("20240101000000_create_role_down.sql", DROP_ROLE),
    ]);
    let db = sqlite().await?;
    let migrator = migrator(&db, dir.path());
    migrator.up().await?;
    db.execute_unprepared("INSERT INTO role (id, name) VALUES ('1', 'admin');")
        .await?;

    let applied = migrator.reset().await?;

    assert_eq!(applied, vec!["20240101000000_create_role.sql"]);
    assert!(table_exists(&db, "role").await?);
    let rows = db
        .query_all_raw(Statement::from_string(
            db.get_database_backend(),
            "SELECT id FROM role",
        ))
        .await?;
    assert!(rows.is_empty());

    Ok(())
}
