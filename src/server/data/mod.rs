//! Database repository layer.
//!
//! `repository::CrudRepository` covers create, read, update and soft delete for every
//! entity. The remaining repositories hold the queries that are not a plain CRUD call:
//! user lookups joined with their role, and patient associations and listings.
//! Repositories return SeaORM entity models; conversion to domain models happens in
//! the service layer.

pub mod patient;
pub mod repository;
pub mod user;

#[cfg(test)]
mod test;
