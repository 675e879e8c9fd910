//! Patient endpoints, including the comorbidity and medication links and the
//! per-patient reading and alert listings.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        alert::AlertDto,
        api::ErrorDto,
        biometric::BiometricDto,
        comorbidity::ComorbidityDto,
        medication::MedicationDto,
        patient::{CreatePatientDto, PatientDto, UpdatePatientDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission, DOCTORS},
        model::patient::{CreatePatientParams, UpdatePatientParams},
        service::patient::PatientService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping patient endpoints in OpenAPI documentation
pub static PATIENT_TAG: &str = "patient";

/// Create a patient.
///
/// # Access Control
/// - `doctor` - Doctors (and admins) can manage patients
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Patient fields
///
/// # Returns
/// - `201 Created` - The created patient
/// - `400 Bad Request` - Invalid body or referenced row missing
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `409 Conflict` - Unique value already taken
#[utoipa::path(
    post,
    path = "/api/patients",
    tag = PATIENT_TAG,
    request_body = CreatePatientDto,
    responses(
        (status = 201, description = "Created patient", body = PatientDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreatePatientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    let params = CreatePatientParams::from_dto(payload)?;
    let patient = PatientService::new(&state.db, &state.cache).create(params).await?;

    Ok((StatusCode::CREATED, Json(patient.into_dto())))
}

/// List all patients.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Every live patient, oldest first
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/patients",
    tag = PATIENT_TAG,
    responses(
        (status = 200, description = "All patients", body = Vec<PatientDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_patients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let patients = PatientService::new(&state.db, &state.cache).get_all().await?;

    Ok(Json(
        patients
            .into_iter()
            .map(|patient| patient.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a patient by ID.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Patient ID
///
/// # Returns
/// - `200 OK` - The patient
/// - `400 Bad Request` - ID is not a UUID
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No live patient with that ID
#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "The patient", body = PatientDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_patient_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let patient = PatientService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    Ok(Json(patient.into_dto()))
}

/// Update a patient.
///
/// Only the fields present in the body are changed.
///
/// # Access Control
/// - `doctor` - Doctors (and admins) can manage patients
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Patient ID
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated patient
/// - `400 Bad Request` - Invalid body or ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live patient with that ID
#[utoipa::path(
    put,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient ID")),
    request_body = UpdatePatientDto,
    responses(
        (status = 200, description = "Updated patient", body = PatientDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(payload): ValidJson<UpdatePatientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    let params = UpdatePatientParams::from_dto(payload)?;
    let patient = PatientService::new(&state.db, &state.cache)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    Ok(Json(patient.into_dto()))
}

/// Delete a patient.
///
/// The row is soft-deleted and disappears from every read.
///
/// # Access Control
/// - `doctor` - Doctors (and admins) can manage patients
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Patient ID
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live patient with that ID
#[utoipa::path(
    delete,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 204, description = "Deleted patient"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    if !PatientService::new(&state.db, &state.cache).delete(id).await? {
        return Err(AppError::NotFound("Patient not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List a patient's comorbidities.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Linked comorbidities ordered by name
/// - `404 Not Found` - No live patient with that ID
#[utoipa::path(
    get,
    path = "/api/patients/{id}/comorbidities",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Linked comorbidities", body = Vec<ComorbidityDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_patient_comorbidities(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let comorbidities = PatientService::new(&state.db, &state.cache)
        .get_comorbidities(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    Ok(Json(
        comorbidities
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<ComorbidityDto>>(),
    ))
}

/// Link a comorbidity to a patient.
///
/// Linking an already linked comorbidity succeeds without changes.
///
/// # Access Control
/// - `doctor` - Doctors (and admins) can manage patient links
///
/// # Returns
/// - `204 No Content` - Linked
/// - `404 Not Found` - Patient or comorbidity missing
#[utoipa::path(
    post,
    path = "/api/patients/{id}/comorbidities/{comorbidity_id}",
    tag = PATIENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Patient ID"),
        ("comorbidity_id" = Uuid, Path, description = "Comorbidity ID")
    ),
    responses(
        (status = 204, description = "Comorbidity linked"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Patient or comorbidity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn attach_patient_comorbidity(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath((id, comorbidity_id)): ValidPath<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    PatientService::new(&state.db, &state.cache)
        .attach_comorbidity(id, comorbidity_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Unlink a comorbidity from a patient.
#[utoipa::path(
    delete,
    path = "/api/patients/{id}/comorbidities/{comorbidity_id}",
    tag = PATIENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Patient ID"),
        ("comorbidity_id" = Uuid, Path, description = "Comorbidity ID")
    ),
    responses(
        (status = 204, description = "Comorbidity unlinked"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (
            status = 404,
            description = "Patient not found or comorbidity not linked",
            body = ErrorDto
        ),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn detach_patient_comorbidity(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath((id, comorbidity_id)): ValidPath<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    PatientService::new(&state.db, &state.cache)
        .detach_comorbidity(id, comorbidity_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List a patient's medications.
#[utoipa::path(
    get,
    path = "/api/patients/{id}/medications",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Linked medications", body = Vec<MedicationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_patient_medications(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let medications = PatientService::new(&state.db, &state.cache)
        .get_medications(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    Ok(Json(
        medications
            .into_iter()
            .map(|m| m.into_dto())
            .collect::<Vec<MedicationDto>>(),
    ))
}

/// Link a medication to a patient.
#[utoipa::path(
    post,
    path = "/api/patients/{id}/medications/{medication_id}",
    tag = PATIENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Patient ID"),
        ("medication_id" = Uuid, Path, description = "Medication ID")
    ),
    responses(
        (status = 204, description = "Medication linked"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Patient or medication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn attach_patient_medication(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath((id, medication_id)): ValidPath<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    PatientService::new(&state.db, &state.cache)
        .attach_medication(id, medication_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Unlink a medication from a patient.
#[utoipa::path(
    delete,
    path = "/api/patients/{id}/medications/{medication_id}",
    tag = PATIENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Patient ID"),
        ("medication_id" = Uuid, Path, description = "Medication ID")
    ),
    responses(
        (status = 204, description = "Medication unlinked"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Patient not found or medication not linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn detach_patient_medication(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath((id, medication_id)): ValidPath<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    PatientService::new(&state.db, &state.cache)
        .detach_medication(id, medication_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List a patient's biometric readings, most recent first.
#[utoipa::path(
    get,
    path = "/api/patients/{id}/biometrics",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient readings", body = Vec<BiometricDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_patient_biometrics(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let readings = PatientService::new(&state.db, &state.cache)
        .get_biometrics(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    Ok(Json(
        readings
            .into_iter()
            .map(|r| r.into_dto())
            .collect::<Vec<BiometricDto>>(),
    ))
}

/// List a patient's alerts, most recent first.
#[utoipa::path(
    get,
    path = "/api/patients/{id}/alerts",
    tag = PATIENT_TAG,
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient alerts", body = Vec<AlertDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_patient_alerts(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let alerts = PatientService::new(&state.db, &state.cache)
        .get_alerts(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    Ok(Json(
        alerts
            .into_iter()
            .map(|a| a.into_dto())
            .collect::<Vec<AlertDto>>(),
    ))
}
