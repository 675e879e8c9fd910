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
        medication::{CreateMedicationDto, MedicationDto, UpdateMedicationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission, DOCTORS},
        model::medication::{CreateMedicationParams, UpdateMedicationParams},
        service::medication::MedicationService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping medication endpoints in OpenAPI documentation
pub static MEDICATION_TAG: &str = "medication";

/// Create a medication.
#[utoipa::path(
    post,
    path = "/api/medications",
    tag = MEDICATION_TAG,
    request_body = CreateMedicationDto,
    responses(
        (status = 201, description = "Created medication", body = MedicationDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_medication(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateMedicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    let params = CreateMedicationParams::from_dto(payload)?;
    let medication = MedicationService::new(&state.db, &state.cache).create(params).await?;

    Ok((StatusCode::CREATED, Json(medication.into_dto())))
}

/// List all medications.
#[utoipa::path(
    get,
    path = "/api/medications",
    tag = MEDICATION_TAG,
    responses(
        (status = 200, description = "All medications", body = Vec<MedicationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_medications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let medications = MedicationService::new(&state.db, &state.cache).get_all().await?;

    Ok(Json(
        medications
            .into_iter()
            .map(|medication| medication.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a medication by ID.
#[utoipa::path(
    get,
    path = "/api/medications/{id}",
    tag = MEDICATION_TAG,
    params(("id" = Uuid, Path, description = "Medication ID")),
    responses(
        (status = 200, description = "The medication", body = MedicationDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Medication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_medication_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let medication = MedicationService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Medication not found".to_string()))?;

    Ok(Json(medication.into_dto()))
}

/// Update a medication.
#[utoipa::path(
    put,
    path = "/api/medications/{id}",
    tag = MEDICATION_TAG,
    params(("id" = Uuid, Path, description = "Medication ID")),
    request_body = UpdateMedicationDto,
    responses(
        (status = 200, description = "Updated medication", body = MedicationDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Medication not found", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_medication(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(payload): ValidJson<UpdateMedicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    let params = UpdateMedicationParams::from_dto(payload)?;
    let medication = MedicationService::new(&state.db, &state.cache)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Medication not found".to_string()))?;

    Ok(Json(medication.into_dto()))
}

/// Delete a medication.
#[utoipa::path(
    delete,
    path = "/api/medications/{id}",
    tag = MEDICATION_TAG,
    params(("id" = Uuid, Path, description = "Medication ID")),
    responses(
        (status = 204, description = "Deleted medication"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Medication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_medication(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    if !MedicationService::new(&state.db, &state.cache).delete(id).await? {
        return Err(AppError::NotFound("Medication not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
