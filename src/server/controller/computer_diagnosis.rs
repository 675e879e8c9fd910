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
        computer_diagnosis::{
            ComputerDiagnosisDto, CreateComputerDiagnosisDto, UpdateComputerDiagnosisDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission, DOCTORS},
        model::computer_diagnosis::{CreateComputerDiagnosisParams, UpdateComputerDiagnosisParams},
        service::computer_diagnosis::ComputerDiagnosisService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping computer diagnosis endpoints in OpenAPI documentation
pub static COMPUTER_DIAGNOSIS_TAG: &str = "computer_diagnosis";

/// Create a computer diagnosis.
///
/// # Access Control
/// - `doctor` - Doctors (and admins) can record diagnoses
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Computer diagnosis fields
///
/// # Returns
/// - `201 Created` - The created computer diagnosis
/// - `400 Bad Request` - Invalid body or referenced row missing
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `409 Conflict` - Unique value already taken
#[utoipa::path(
    post,
    path = "/api/computer-diagnoses",
    tag = COMPUTER_DIAGNOSIS_TAG,
    request_body = CreateComputerDiagnosisDto,
    responses(
        (status = 201, description = "Created computer diagnosis", body = ComputerDiagnosisDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_computer_diagnosis(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateComputerDiagnosisDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    let params = CreateComputerDiagnosisParams::from_dto(payload)?;
    let computer_diagnosis = ComputerDiagnosisService::new(&state.db, &state.cache)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(computer_diagnosis.into_dto())))
}

/// List all computer diagnoses.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Every live computer diagnosis, oldest first
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/computer-diagnoses",
    tag = COMPUTER_DIAGNOSIS_TAG,
    responses(
        (status = 200, description = "All computer diagnoses", body = Vec<ComputerDiagnosisDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_computer_diagnoses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let computer_diagnoses = ComputerDiagnosisService::new(&state.db, &state.cache)
        .get_all()
        .await?;

    Ok(Json(
        computer_diagnoses
            .into_iter()
            .map(|computer_diagnosis| computer_diagnosis.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a computer diagnosis by ID.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Computer diagnosis ID
///
/// # Returns
/// - `200 OK` - The computer diagnosis
/// - `400 Bad Request` - ID is not a UUID
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No live computer diagnosis with that ID
#[utoipa::path(
    get,
    path = "/api/computer-diagnoses/{id}",
    tag = COMPUTER_DIAGNOSIS_TAG,
    params(("id" = Uuid, Path, description = "Computer diagnosis ID")),
    responses(
        (status = 200, description = "The computer diagnosis", body = ComputerDiagnosisDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Computer diagnosis not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_computer_diagnosis_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let computer_diagnosis = ComputerDiagnosisService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Computer diagnosis not found".to_string()))?;

    Ok(Json(computer_diagnosis.into_dto()))
}

/// Update a computer diagnosis.
///
/// Only the fields present in the body are changed.
///
/// # Access Control
/// - `doctor` - Doctors (and admins) can record diagnoses
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Computer diagnosis ID
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated computer diagnosis
/// - `400 Bad Request` - Invalid body or ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live computer diagnosis with that ID
#[utoipa::path(
    put,
    path = "/api/computer-diagnoses/{id}",
    tag = COMPUTER_DIAGNOSIS_TAG,
    params(("id" = Uuid, Path, description = "Computer diagnosis ID")),
    request_body = UpdateComputerDiagnosisDto,
    responses(
        (status = 200, description = "Updated computer diagnosis", body = ComputerDiagnosisDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Computer diagnosis not found", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_computer_diagnosis(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(payload): ValidJson<UpdateComputerDiagnosisDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    let params = UpdateComputerDiagnosisParams::from_dto(payload)?;
    let computer_diagnosis = ComputerDiagnosisService::new(&state.db, &state.cache)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Computer diagnosis not found".to_string()))?;

    Ok(Json(computer_diagnosis.into_dto()))
}

/// Delete a computer diagnosis.
///
/// The row is soft-deleted and disappears from every read.
///
/// # Access Control
/// - `doctor` - Doctors (and admins) can record diagnoses
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Computer diagnosis ID
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live computer diagnosis with that ID
#[utoipa::path(
    delete,
    path = "/api/computer-diagnoses/{id}",
    tag = COMPUTER_DIAGNOSIS_TAG,
    params(("id" = Uuid, Path, description = "Computer diagnosis ID")),
    responses(
        (status = 204, description = "Deleted computer diagnosis"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Computer diagnosis not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_computer_diagnosis(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    if !ComputerDiagnosisService::new(&state.db, &state.cache).delete(id).await? {
        return Err(AppError::NotFound("Computer diagnosis not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
