//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need a parent row (a user needs a role, a
//! reading needs a patient) take the parent's id explicitly; the `helpers` module chains
//! them when a test only cares about the leaf entity.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let role = factory::role::create_role(&db).await?;
//! let user = factory::user::create_user(&db, role.id).await?;
//!
//! let (patient, device, reading) = factory::helpers::create_reading_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db, role.id)
//!     .username("nurse.joy")
//!     .password_hash(hash)
//!     .build()
//!     .await?;
//! ```

pub mod alert;
pub mod biometric;
pub mod comorbidity;
pub mod doctor;
pub mod helpers;
pub mod medication;
pub mod monitoring_device;
pub mod patient;
pub mod role;
pub mod user;

pub use alert::create_alert;
pub use biometric::create_biometric;
pub use comorbidity::create_comorbidity;
pub use doctor::create_doctor;
pub use medication::create_medication;
pub use monitoring_device::create_device;
pub use patient::create_patient;
pub use role::{create_role, create_role_named};
pub use user::create_user;
