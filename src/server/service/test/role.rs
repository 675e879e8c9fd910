use super::*;
use crate::server::{
    model::role::{CreateRoleParams, DOCTOR_ROLE},
    service::role::RoleService,
};

/// Expected: Conflict for a built-in role, which stays live
#[tokio::test]
async fn refuses_to_delete_built_in_role() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();
    let service = RoleService::new(db, &cache);

    let role = factory::role::create_role_named(db, DOCTOR_ROLE).await?;

    let result = service.delete(role.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.get_by_id(role.id).await?.is_some());

    Ok(())
}

/// Expected: a custom role is deleted and its name can be taken again
#[tokio::test]
async fn deletes_custom_role_and_frees_name() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();
    let service = RoleService::new(db, &cache);

    let params = CreateRoleParams {
        name: "pharmacist".to_string(),
        description: None,
    };
    let role = service.create(params.clone()).await?;

    assert!(service.delete(role.id).await?);
    assert!(!service.delete(role.id).await?);
    assert!(service.get_by_id(role.id).await?.is_none());

    let recreated = service.create(params).await?;
    assert_ne!(recreated.id, role.id);

    Ok(())
}

/// Expected: false for an unknown role
#[tokio::test]
async fn delete_unknown_role_returns_false() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let cache = Cache::disabled();

    assert!(!RoleService::new(db, &cache).delete(Uuid::new_v4()).await?);

    Ok(())
}
