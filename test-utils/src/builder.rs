use entity::{prelude::*, soft_delete::SoftDelete};
use sea_orm::{sea_query::TableCreateStatement, EntityName, EntityTrait, IdenStatic, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Comorbidity, Medication, PatientMedication};
///
/// let test = TestBuilder::new()
///     .with_soft_delete_table(Comorbidity)
///     .with_soft_delete_table(Medication)
///     .with_table(PatientMedication)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Raw statements run after every table exists, such as partial indexes.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference, since SQLite enforces foreign keys on these connections.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a soft-deletable entity table together with its live-unique indexes.
    ///
    /// Mirrors the migrations: each column from `SoftDelete::live_unique_columns`
    /// gets a unique index restricted to rows where `deleted_at IS NULL`.
    pub fn with_soft_delete_table<E: SoftDelete>(mut self, entity: E) -> Self {
        let table = EntityName::table_name(&entity);
        for column in E::live_unique_columns() {
            self.statements.push(format!(
                "CREATE UNIQUE INDEX \"ux_{table}_{column}_live\" ON \"{table}\" (\"{column}\") \
                 WHERE deleted_at IS NULL",
                table = table,
                column = IdenStatic::as_str(&column),
            ));
        }
        self.with_table(entity)
    }

    /// Adds the tables needed for authentication: Role and User.
    pub fn with_auth_tables(self) -> Self {
        self.with_soft_delete_table(Role).with_soft_delete_table(User)
    }

    /// Adds every table in dependency order.
    ///
    /// Use this when testing functionality that touches patients or anything
    /// hanging off them (readings, alerts, devices, associations).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_auth_tables()
            .with_soft_delete_table(Doctor)
            .with_soft_delete_table(Patient)
            .with_soft_delete_table(Phone)
            .with_soft_delete_table(MonitoringDevice)
            .with_soft_delete_table(Biometric)
            .with_soft_delete_table(Alert)
            .with_soft_delete_table(Comorbidity)
            .with_table(PatientComorbidity)
            .with_soft_delete_table(Medication)
            .with_table(PatientMedication)
            .with_soft_delete_table(ComputerDiagnosis)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database, create tables or indexes
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}
