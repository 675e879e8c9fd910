//! Request and response bodies exchanged over the HTTP API.
//!
//! These types define the JSON contract and the OpenAPI schemas. They carry no
//! behavior; conversion to and from domain models lives in `server::model`.

pub mod alert;
pub mod api;
pub mod auth;
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
