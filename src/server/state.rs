//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Redis read-through cache (possibly disabled)
//! - Token service for issuing and verifying JWTs

use sea_orm::DatabaseConnection;

use crate::server::{cache::Cache, service::auth::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Cache` wraps a multiplexed Redis `ConnectionManager`
/// - `TokenService` holds its keys behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Read-through cache for single-entity lookups.
    ///
    /// A no-op when `REDIS_URL` is not configured.
    pub cache: Cache,

    /// Signs and verifies the bearer tokens handed out by `/api/auth/login`.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cache` - Redis cache handle
    /// - `tokens` - JWT issuing and verification service
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, cache: Cache, tokens: TokenService) -> Self {
        Self { db, cache, tokens }
    }
}
