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
        doctor::{CreateDoctorDto, DoctorDto, UpdateDoctorDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::doctor::{CreateDoctorParams, UpdateDoctorParams},
        service::doctor::DoctorService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping doctor endpoints in OpenAPI documentation
pub static DOCTOR_TAG: &str = "doctor";

/// Create a doctor.
#[utoipa::path(
    post,
    path = "/api/doctors",
    tag = DOCTOR_TAG,
    request_body = CreateDoctorDto,
    responses(
        (status = 201, description = "Created doctor", body = DoctorDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateDoctorParams::from_dto(payload)?;
    let doctor = DoctorService::new(&state.db, &state.cache).create(params).await?;

    Ok((StatusCode::CREATED, Json(doctor.into_dto())))
}

/// List all doctors.
#[utoipa::path(
    get,
    path = "/api/doctors",
    tag = DOCTOR_TAG,
    responses(
        (status = 200, description = "All doctors", body = Vec<DoctorDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_doctors(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let doctors = DoctorService::new(&state.db, &state.cache).get_all().await?;

    Ok(Json(
        doctors
            .into_iter()
            .map(|doctor| doctor.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a doctor by ID.
#[utoipa::path(
    get,
    path = "/api/doctors/{id}",
    tag = DOCTOR_TAG,
    params(("id" = Uuid, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "The doctor", body = DoctorDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_doctor_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let doctor = DoctorService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(doctor.into_dto()))
}

/// Update a doctor.
#[utoipa::path(
    put,
    path = "/api/doctors/{id}",
    tag = DOCTOR_TAG,
    params(("id" = Uuid, Path, description = "Doctor ID")),
    request_body = UpdateDoctorDto,
    responses(
        (status = 200, description = "Updated doctor", body = DoctorDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(payload): ValidJson<UpdateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateDoctorParams::from_dto(payload)?;
    let doctor = DoctorService::new(&state.db, &state.cache)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(doctor.into_dto()))
}

/// Delete a doctor.
#[utoipa::path(
    delete,
    path = "/api/doctors/{id}",
    tag = DOCTOR_TAG,
    params(("id" = Uuid, Path, description = "Doctor ID")),
    responses(
        (status = 204, description = "Deleted doctor"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !DoctorService::new(&state.db, &state.cache).delete(id).await? {
        return Err(AppError::NotFound("Doctor not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
