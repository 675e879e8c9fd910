//! HTTP API backend.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and an
//! optional Redis read-through cache.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Reference checks, caching and repository orchestration
//! - **Data Layer** (`data/`) - Generic soft-delete CRUD repository plus join queries
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication and role guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, cache, token service)
//! - **Startup** (`startup`) - Database connection, migrations, role and admin seeding
//! - **Router** (`router`) - Route table and OpenAPI documentation
//! - **Cache** (`cache`) - Redis wrapper that degrades to a no-op
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** authenticates through `AuthGuard` and converts the DTO to params
//! 3. **Service** checks referenced rows, consults the cache and calls the data layer
//! 4. **Data** queries the database, skipping soft-deleted rows
//! 5. **Controller** converts the domain model to a DTO and picks the status code

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
