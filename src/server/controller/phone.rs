use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        phone::{CreatePhoneDto, PhoneDto, UpdatePhoneDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission, DOCTORS},
        model::phone::{CreatePhoneParams, UpdatePhoneParams},
        service::phone::PhoneService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping phone endpoints in OpenAPI documentation
pub static PHONE_TAG: &str = "phone";

/// Create a phone.
#[utoipa::path(
    post,
    path = "/api/phones",
    tag = PHONE_TAG,
    request_body = CreatePhoneDto,
    responses(
        (status = 201, description = "Created phone", body = PhoneDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_phone(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreatePhoneDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    let params = CreatePhoneParams::from_dto(payload)?;
    let phone = PhoneService::new(&state.db, &state.cache).create(params).await?;

    Ok((StatusCode::CREATED, Json(phone.into_dto())))
}

/// List all phones.
#[utoipa::path(
    get,
    path = "/api/phones",
    tag = PHONE_TAG,
    responses(
        (status = 200, description = "All phones", body = Vec<PhoneDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_phones(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let phones = PhoneService::new(&state.db, &state.cache).get_all().await?;

    Ok(Json(
        phones
            .into_iter()
            .map(|phone| phone.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a phone by ID.
#[utoipa::path(
    get,
    path = "/api/phones/{id}",
    tag = PHONE_TAG,
    params(("id" = Uuid, Path, description = "Phone ID")),
    responses(
        (status = 200, description = "The phone", body = PhoneDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Phone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_phone_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let phone = PhoneService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Phone not found".to_string()))?;

    Ok(Json(phone.into_dto()))
}

/// Update a phone.
#[utoipa::path(
    put,
    path = "/api/phones/{id}",
    tag = PHONE_TAG,
    params(("id" = Uuid, Path, description = "Phone ID")),
    request_body = UpdatePhoneDto,
    responses(
        (status = 200, description = "Updated phone", body = PhoneDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Phone not found", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_phone(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(payload): ValidJson<UpdatePhoneDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    let params = UpdatePhoneParams::from_dto(payload)?;
    let phone = PhoneService::new(&state.db, &state.cache)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Phone not found".to_string()))?;

    Ok(Json(phone.into_dto()))
}

/// Delete a phone.
#[utoipa::path(
    delete,
    path = "/api/phones/{id}",
    tag = PHONE_TAG,
    params(("id" = Uuid, Path, description = "Phone ID")),
    responses(
        (status = 204, description = "Deleted phone"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Phone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_phone(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    if !PhoneService::new(&state.db, &state.cache).delete(id).await? {
        return Err(AppError::NotFound("Phone not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
