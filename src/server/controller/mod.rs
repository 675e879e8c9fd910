//! HTTP handlers.
//!
//! Each handler authenticates the request with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts the DTO into service parameters, calls the service and maps the result
//! back into a DTO. Missing rows become `404 Not Found` here; services only report
//! absence through `Option` and `bool`.

pub mod alert;
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

#[cfg(test)]
mod test;
