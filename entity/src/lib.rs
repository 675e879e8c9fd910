//! SeaORM entity definitions for the biometric monitoring schema.
//!
//! Every top-level table carries `created_at`, `updated_at` and a nullable
//! `deleted_at` column. Rows with `deleted_at` set are treated as removed by the
//! repositories, see [`soft_delete::SoftDelete`].

pub mod prelude;

pub mod alert;
pub mod biometric;
pub mod comorbidity;
pub mod computer_diagnosis;
pub mod doctor;
pub mod medication;
pub mod monitoring_device;
pub mod patient;
pub mod patient_comorbidity;
pub mod patient_medication;
pub mod phone;
pub mod role;
pub mod sea_orm_active_enums;
pub mod soft_delete;
pub mod user;
