use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::Path;
use tempfile::TempDir;

use crate::{MigrationError, SqlMigrator};

mod down;
mod up;

/// Writes `(filename, sql)` pairs into a fresh temporary directory.
fn migrations_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, sql) in files {
        std::fs::write(dir.path().join(name), sql).unwrap();
    }
    dir
}

async fn sqlite() -> Result<DatabaseConnection, DbErr> {
    Database::connect("sqlite::memory:").await
}

/// Returns whether a table exists in the SQLite schema.
async fn table_exists(db: &DatabaseConnection, table: &str) -> Result<bool, DbErr> {
    let row = db
        .query_one_raw(Statement::from_sql_and_values(
            db.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
            [table.into()],
        ))
        .await?;
    Ok(row.is_some())
}

fn migrator<'a>(db: &'a DatabaseConnection, dir: &Path) -> SqlMigrator<'a> {
    SqlMigrator::new(db, dir)
}

const CREATE_ROLE: &str = "CREATE TABLE role (id TEXT PRIMARY KEY, name TEXT NOT NULL);";
const DROP_ROLE: &str = "DROP TABLE role;";
const CREATE_USER: &str =
    "CREATE TABLE user (id TEXT PRIMARY KEY, role_id TEXT NOT NULL REFERENCES role (id));";
const DROP_USER: &str = "DROP TABLE user;";
