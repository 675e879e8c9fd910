//! Domain models and operation parameters.
//!
//! Each entity gets a domain type converted from the SeaORM model at the repository
//! boundary (`from_entity`) and into the API shape at the controller boundary
//! (`into_dto`). Create and update parameters are built from request DTOs with
//! `from_dto`, which is where request validation happens; they in turn produce the
//! active models handed to the repository.
//!
//! Update parameters carry `Option` fields: `None` leaves the stored value untouched.

pub mod alert;
pub mod biometric;
pub mod comorbidity;
pub mod computer_diagnosis;
pub mod doctor;
pub mod medication;
pub mod monitoring_device;
pub mod patient;
pub mod phone;
pub mod role;
pub mod user;
