//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for columns with unique constraints (usernames, DNIs, serial numbers) so that
/// factories can be called repeatedly within one test.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a role and a user holding it.
///
/// # Returns
/// - `Ok((role, user))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role_name: &str,
) -> Result<(entity::role::Model, entity::user::Model), DbErr> {
    let role = crate::factory::role::create_role_named(db, role_name).await?;
    let user = crate::factory::user::create_user(db, role.id).await?;

    Ok((role, user))
}

/// Creates a patient, a device attached to them and one reading from that device.
///
/// # Returns
/// - `Ok((patient, device, biometric))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reading_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::patient::Model,
        entity::monitoring_device::Model,
        entity::biometric::Model,
    ),
    DbErr,
> {
    let patient = crate::factory::patient::create_patient(db).await?;
    let device = crate::factory::monitoring_device::DeviceFactory::new(db)
        .patient_id(patient.id)
        .build()
        .await?;
    let biometric = crate::factory::biometric::BiometricFactory::new(db, patient.id)
        .device_id(device.id)
        .build()
        .await?;

    Ok((patient, device, biometric))
}
