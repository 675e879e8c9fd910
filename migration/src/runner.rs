use std::path::{Path, PathBuf};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder,
    Schema, TransactionTrait,
};

use crate::{error::MigrationError, schema_migration};

const SQL_EXTENSION: &str = "sql";
const DOWN_SUFFIX: &str = "_down";

/// An "up" migration file discovered in the migrations directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// File name including extension, used as the bookkeeping key.
    pub name: String,
    pub path: PathBuf,
}

/// Applies and rolls back `.sql` files tracked in `schema_migrations`.
pub struct SqlMigrator<'a> {
    db: &'a DatabaseConnection,
    dir: PathBuf,
}

impl<'a> SqlMigrator<'a> {
    /// Creates a migrator reading files from `dir`.
    ///
    /// # Arguments
    /// - `db` - Connection the migrations are executed on
    /// - `dir` - Directory containing `<name>.sql` and `<name>_down.sql` files
    pub fn new(db: &'a DatabaseConnection, dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            dir: dir.into(),
        }
    }

    /// Lists the "up" migration files in the directory, sorted by filename.
    ///
    /// Files ending in `_down.sql` and anything without a `.sql` extension are
    /// skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<MigrationFile>)` - Up migrations in application order
    /// - `Err(MigrationError::Read)` - The directory could not be listed
    pub async fn discover(&self) -> Result<Vec<MigrationFile>, MigrationError> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|source| read_error(&self.dir, source))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| read_error(&self.dir, source))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SQL_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
                continue;
            };
            if is_down_file(&name) {
                continue;
            }
            files.push(MigrationFile { name, path });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(files)
    }

    /// Creates the `schema_migrations` table if it does not exist yet.
    pub async fn ensure_table(&self) -> Result<(), MigrationError> {
        let backend = self.db.get_database_backend();
        let mut stmt = Schema::new(backend).create_table_from_entity(schema_migration::Entity);
        stmt.if_not_exists();

        self.db.execute(&stmt).await?;

        Ok(())
    }

    /// Returns the filenames recorded as applied, in ascending order.
    pub async fn applied(&self) -> Result<Vec<String>, MigrationError> {
        self.ensure_table().await?;

        let applied = schema_migration::Entity::find()
            .order_by_asc(schema_migration::Column::Filename)
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.filename)
            .collect();

        Ok(applied)
    }

    /// Applies every migration file not yet recorded.
    ///
    /// Each file runs in its own transaction together with the insert of its
    /// bookkeeping row, so a failing file leaves neither partial schema changes
    /// (on backends with transactional DDL) nor a record. Files after a failing
    /// one are not attempted.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Names of the files applied by this call
    /// - `Err(MigrationError)` - Reading a file or executing it failed
    pub async fn up(&self) -> Result<Vec<String>, MigrationError> {
        let applied = self.applied().await?;
        let files = self.discover().await?;

        let mut newly_applied = Vec::new();
        for file in files.into_iter().filter(|f| !applied.contains(&f.name)) {
            let sql = read_file(&file.path).await?;

            let txn = self.db.begin().await?;
            txn.execute_unprepared(&sql).await?;
            schema_migration::ActiveModel {
                filename: ActiveValue::Set(file.name.clone()),
                applied_at: ActiveValue::Set(Utc::now()),
            }
            .insert(&txn)
            .await?;
            txn.commit().await?;

            tracing::info!("Applied migration {}", file.name);
            newly_applied.push(file.name);
        }

        if newly_applied.is_empty() {
            tracing::info!("Schema is up to date");
        }

        Ok(newly_applied)
    }

    /// Rolls back every applied migration in reverse filename order.
    ///
    /// Runs `<name>_down.sql` for each recorded `<name>.sql` and removes the
    /// record in the same transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Names of the migrations rolled back, newest first
    /// - `Err(MigrationError::MissingDownFile)` - A recorded migration has no down file
    /// - `Err(MigrationError)` - Reading or executing a down file failed
    pub async fn down(&self) -> Result<Vec<String>, MigrationError> {
        let mut applied = self.applied().await?;
        applied.reverse();

        let mut rolled_back = Vec::new();
        for name in applied {
            let down_path = self.dir.join(down_file_name(&name));
            if !tokio::fs::try_exists(&down_path)
                .await
                .map_err(|source| read_error(&down_path, source))?
            {
                return Err(MigrationError::MissingDownFile(name));
            }
            let sql = read_file(&down_path).await?;

            let txn = self.db.begin().await?;
            txn.execute_unprepared(&sql).await?;
            schema_migration::Entity::delete_by_id(name.clone())
                .exec(&txn)
                .await?;
            txn.commit().await?;

            tracing::info!("Rolled back migration {}", name);
            rolled_back.push(name);
        }

        Ok(rolled_back)
    }

    /// Rolls back everything, then re-applies every migration.
    pub async fn reset(&self) -> Result<Vec<String>, MigrationError> {
        self.down().await?;
        self.up().await
    }
}

/// Whether a filename is a rollback companion (`<name>_down.sql`).
pub fn is_down_file(name: &str) -> bool {
    name.strip_suffix(&format!(".{}", SQL_EXTENSION))
        .is_some_and(|stem| stem.ends_with(DOWN_SUFFIX))
}

/// Maps `<name>.sql` to its rollback companion `<name>_down.sql`.
pub fn down_file_name(up_name: &str) -> String {
    let stem = up_name
        .strip_suffix(&format!(".{}", SQL_EXTENSION))
        .unwrap_or(up_name);
    format!("{}{}.{}", stem, DOWN_SUFFIX, SQL_EXTENSION)
}

async fn read_file(path: &Path) -> Result<String, MigrationError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| read_error(path, source))
}

fn read_error(path: &Path, source: std::io::Error) -> MigrationError {
    MigrationError::Read {
        path: path.display().to_string(),
        source,
    }
}
