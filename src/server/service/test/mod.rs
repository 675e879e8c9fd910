use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{cache::Cache, error::AppError};

mod auth;
mod biometric;
mod patient;
mod role;
mod user;

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}

async fn database(test: &mut test_utils::context::TestContext) -> &DatabaseConnection {
    test.database().await.unwrap()
}
