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
        biometric::{CreateBiometricDto, BiometricDto, UpdateBiometricDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission, CLINICAL_STAFF},
        model::biometric::{CreateBiometricParams, UpdateBiometricParams},
        service::biometric::BiometricService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping biometric endpoints in OpenAPI documentation
pub static BIOMETRIC_TAG: &str = "biometric";

/// Create a biometric.
///
/// # Access Control
/// - `doctor`, `nurse` - Clinical staff (and admins) can record readings
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Biometric fields
///
/// # Returns
/// - `201 Created` - The created biometric
/// - `400 Bad Request` - Invalid body or referenced row missing
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `409 Conflict` - Unique value already taken
#[utoipa::path(
    post,
    path = "/api/biometrics",
    tag = BIOMETRIC_TAG,
    request_body = CreateBiometricDto,
    responses(
        (status = 201, description = "Created biometric", body = BiometricDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_biometric(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateBiometricDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await?;

    let params = CreateBiometricParams::from_dto(payload)?;
    let biometric = BiometricService::new(&state.db, &state.cache).create(params).await?;

    Ok((StatusCode::CREATED, Json(biometric.into_dto())))
}

/// List all biometrics.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Every live biometric, oldest first
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/biometrics",
    tag = BIOMETRIC_TAG,
    responses(
        (status = 200, description = "All biometrics", body = Vec<BiometricDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_biometrics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let biometrics = BiometricService::new(&state.db, &state.cache).get_all().await?;

    Ok(Json(
        biometrics
            .into_iter()
            .map(|biometric| biometric.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a biometric by ID.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Biometric ID
///
/// # Returns
/// - `200 OK` - The biometric
/// - `400 Bad Request` - ID is not a UUID
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No live biometric with that ID
#[utoipa::path(
    get,
    path = "/api/biometrics/{id}",
    tag = BIOMETRIC_TAG,
    params(("id" = Uuid, Path, description = "Biometric ID")),
    responses(
        (status = 200, description = "The biometric", body = BiometricDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Biometric not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_biometric_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let biometric = BiometricService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Biometric not found".to_string()))?;

    Ok(Json(biometric.into_dto()))
}

/// Update a biometric.
///
/// Only the fields present in the body are changed.
///
/// # Access Control
/// - `doctor`, `nurse` - Clinical staff (and admins) can record readings
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Biometric ID
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated biometric
/// - `400 Bad Request` - Invalid body or ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live biometric with that ID
#[utoipa::path(
    put,
    path = "/api/biometrics/{id}",
    tag = BIOMETRIC_TAG,
    params(("id" = Uuid, Path, description = "Biometric ID")),
    request_body = UpdateBiometricDto,
    responses(
        (status = 200, description = "Updated biometric", body = BiometricDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Biometric not found", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_biometric(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(payload): ValidJson<UpdateBiometricDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await?;

    let params = UpdateBiometricParams::from_dto(payload)?;
    let biometric = BiometricService::new(&state.db, &state.cache)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Biometric not found".to_string()))?;

    Ok(Json(biometric.into_dto()))
}

/// Delete a biometric.
///
/// The row is soft-deleted and disappears from every read.
///
/// # Access Control
/// - `doctor`, `nurse` - Clinical staff (and admins) can record readings
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Biometric ID
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live biometric with that ID
#[utoipa::path(
    delete,
    path = "/api/biometrics/{id}",
    tag = BIOMETRIC_TAG,
    params(("id" = Uuid, Path, description = "Biometric ID")),
    responses(
        (status = 204, description = "Deleted biometric"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Biometric not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_biometric(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await?;

    if !BiometricService::new(&state.db, &state.cache).delete(id).await? {
        return Err(AppError::NotFound("Biometric not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
