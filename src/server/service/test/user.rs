use super::*;
use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::{
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        util::password::verify_password,
    },
};

async fn stored_hash(db: &DatabaseConnection, id: Uuid) -> String {
    use sea_orm::EntityTrait;

    entity::prelude::User::find_by_id(id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .password_hash
}

/// Expected: password stored as an Argon2 hash, role name resolved
#[tokio::test]
async fn creates_user_with_hashed_password() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;

    let role = factory::create_role_named(db, "nurse").await?;
    let params = CreateUserParams::from_dto(CreateUserDto {
        username: "n.joy".to_string(),
        password: "s3cret".to_string(),
        email: Some("joy@example.org".to_string()),
        role_id: role.id,
    })?;

    let user = UserService::new(db).create(params).await?;

    assert_eq!(user.role, "nurse");
    let hash = stored_hash(db, user.id).await;
    assert_ne!(hash, "s3cret");
    assert_eq!(verify_password("s3cret", &hash), Ok(true));

    Ok(())
}

/// Expected: BadRequest for an unknown role
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;

    let params = CreateUserParams::from_dto(CreateUserDto {
        username: "ghost".to_string(),
        password: "boo".to_string(),
        email: None,
        role_id: Uuid::new_v4(),
    })?;

    let result = UserService::new(db).create(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: a new password is rehashed; omitting it keeps the old hash
#[tokio::test]
async fn update_rehashes_password_only_when_given() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = database(&mut test).await;
    let service = UserService::new(db);

    let role = factory::create_role(db).await?;
    let user = service
        .create(CreateUserParams::from_dto(CreateUserDto {
            username: "dr.wilson".to_string(),
            password: "first".to_string(),
            email: None,
            role_id: role.id,
        })?)
        .await?;
    let original = stored_hash(db, user.id).await;

    let params = UpdateUserParams::from_dto(UpdateUserDto {
        email: Some("wilson@example.org".to_string()),
        ..Default::default()
    })?;
    service.update(user.id, params).await?.unwrap();
    assert_eq!(stored_hash(db, user.id).await, original);

    let params = UpdateUserParams::from_dto(UpdateUserDto {
        password: Some("second".to_string()),
        ..Default::default()
    })?;
    service.update(user.id, params).await?.unwrap();
    let rehashed = stored_hash(db, user.id).await;
    assert_eq!(verify_password("second", &rehashed), Ok(true));

    Ok(())
}
