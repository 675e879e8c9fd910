//! Plain `.sql` schema migrations.
//!
//! Migrations are files in a directory, applied in filename order and recorded in
//! a `schema_migrations` table. Each `<name>.sql` may have a `<name>_down.sql`
//! companion used when rolling back. There is no checksum verification and no
//! dependency graph between files: the filename prefix (a timestamp) is the only
//! ordering.
//!
//! The same [`SqlMigrator`] backs the `migrate` binary and the server's startup.

pub mod cli;
pub mod error;
pub mod runner;
pub mod schema_migration;
pub mod settings;

pub use error::MigrationError;
pub use runner::{MigrationFile, SqlMigrator};
pub use settings::{database_url_from_env, DatabaseSettings, SettingsError};

/// Directory searched for migration files when `MIGRATIONS_DIR` is unset.
pub const DEFAULT_MIGRATIONS_DIR: &str = "migration/sql";

#[cfg(test)]
mod test;
