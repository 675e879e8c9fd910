use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Error, Debug)]
pub enum MigrationError {
    /// Database error while executing a migration or bookkeeping query.
    ///
    /// The transaction for the migration in progress is rolled back, so the file
    /// is not recorded as applied.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A migration file or the migrations directory could not be read.
    #[error("Failed to read migration path '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A recorded migration has no `_down.sql` companion to roll it back with.
    #[error("No down migration found for '{0}'")]
    MissingDownFile(String),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Command line argument the `migrate` binary does not understand.
    #[error("Unknown argument '{0}', expected --reset, --down or --dir <path>")]
    UnknownArgument(String),
}
