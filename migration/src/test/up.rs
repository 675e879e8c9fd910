use super::*;

/// Tests applying all pending migrations on an empty database.
///
/// Verifies that every file is executed, recorded in `schema_migrations` and
/// reported back in filename order.
///
/// Expected: Ok with both files applied and both tables created
#[tokio::test]
async fn applies_pending_files_in_order() -> Result<(), MigrationError> {
    let dir = migrations_dir(&[
        ("20240101000000_create_role.sql", CREATE_ROLE),
        ("20240102000000_create_user.sql", CREATE_USER),
    ]);
    let db = sqlite().await?;
    let migrator = migrator(&db, dir.path());

    let applied = migrator.up().await?;

    assert_eq!(
        applied,
        vec!["20240101000000_create_role.sql", "20240102000000_create_user.sql"]
    );
    assert!(table_exists(&db, "role").await?);
    assert!(table_exists(&db, "user").await?);
    assert_eq!(migrator.applied().await?, applied);

    Ok(())
}

/// Tests running the migrator twice.
///
/// Verifies that already-recorded files are not executed again, which would
/// otherwise fail on `CREATE TABLE` of an existing table.
///
/// Expected: Ok with an empty list on the second run
#[tokio::test]
async fn second_run_applies_nothing() -> Result<(), MigrationError> {
    let dir = migrations_dir(&[("20240101000000_create_role.sql", CREATE_ROLE)]);
    let db = sqlite().await?;
    let migrator = migrator(&db, dir.path());

    migrator.up().await?;
    let second = migrator.up().await?;

    assert!(second.is_empty());

    Ok(())
}

/// Tests that files added later are picked up on the next run.
///
/// Expected: Ok with only the new file applied
#[tokio::test]
async fn applies_only_new_files() -> Result<(), MigrationError> {
    let dir = migrations_dir(&[("20240101000000_create_role.sql", CREATE_ROLE)]);
    let db = sqlite().await?;
    let migrator = migrator(&db, dir.path());

    migrator.up().await?;
    std::fs::write(
        dir.path().join("20240102000000_create_user.sql"),
        CREATE_USER,
    )
    .unwrap();
    let applied = migrator.up().await?;

    assert_eq!(applied, vec!["20240102000000_create_user.sql"]);

    Ok(())
}

/// Tests a failing migration file.
///
/// Verifies that the broken file is not recorded, that files before it stay
/// applied and that files after it are not attempted.
///
/// Expected: Err(MigrationError::DbErr) with only the first file recorded
#[tokio::test]
async fn failing_file_is_not_recorded() -> Result<(), MigrationError> {
    let dir = migrations_dir(&[
        ("20240101000000_create_role.sql", CREATE_ROLE),
        ("20240102000000_broken.sql", "CREATE TABLE ("),
        ("20240103000000_create_user.sql", CREATE_USER),
    ]);
    let db = sqlite().await?;
    let migrator = migrator(&db, dir.path());

    let result = migrator.up().await;

    assert!(matches!(result, Err(MigrationError::DbErr(_))));
    assert_eq!(
        migrator.applied().await?,
        vec!["20240101000000_create_role.sql"]
    );
    assert!(!table_exists(&db, "user").await?);

    Ok(())
}
