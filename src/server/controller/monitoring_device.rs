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
        monitoring_device::{
            CreateMonitoringDeviceDto, MonitoringDeviceDto, UpdateMonitoringDeviceDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission, CLINICAL_STAFF},
        model::monitoring_device::{CreateMonitoringDeviceParams, UpdateMonitoringDeviceParams},
        service::monitoring_device::MonitoringDeviceService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping monitoring device endpoints in OpenAPI documentation
pub static MONITORING_DEVICE_TAG: &str = "monitoring_device";

/// Create a monitoring device.
///
/// # Access Control
/// - `doctor`, `nurse` - Clinical staff (and admins) can manage devices
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Monitoring device fields
///
/// # Returns
/// - `201 Created` - The created monitoring device
/// - `400 Bad Request` - Invalid body or referenced row missing
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `409 Conflict` - Unique value already taken
#[utoipa::path(
    post,
    path = "/api/monitoring-devices",
    tag = MONITORING_DEVICE_TAG,
    request_body = CreateMonitoringDeviceDto,
    responses(
        (status = 201, description = "Created monitoring device", body = MonitoringDeviceDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_monitoring_device(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateMonitoringDeviceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await?;

    let params = CreateMonitoringDeviceParams::from_dto(payload)?;
    let monitoring_device = MonitoringDeviceService::new(&state.db, &state.cache)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(monitoring_device.into_dto())))
}

/// List all monitoring devices.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Every live monitoring device, oldest first
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/monitoring-devices",
    tag = MONITORING_DEVICE_TAG,
    responses(
        (status = 200, description = "All monitoring devices", body = Vec<MonitoringDeviceDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_monitoring_devices(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let monitoring_devices = MonitoringDeviceService::new(&state.db, &state.cache).get_all().await?;

    Ok(Json(
        monitoring_devices
            .into_iter()
            .map(|monitoring_device| monitoring_device.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a monitoring device by ID.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Monitoring device ID
///
/// # Returns
/// - `200 OK` - The monitoring device
/// - `400 Bad Request` - ID is not a UUID
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No live monitoring device with that ID
#[utoipa::path(
    get,
    path = "/api/monitoring-devices/{id}",
    tag = MONITORING_DEVICE_TAG,
    params(("id" = Uuid, Path, description = "Monitoring device ID")),
    responses(
        (status = 200, description = "The monitoring device", body = MonitoringDeviceDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Monitoring device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_monitoring_device_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let monitoring_device = MonitoringDeviceService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Monitoring device not found".to_string()))?;

    Ok(Json(monitoring_device.into_dto()))
}

/// Update a monitoring device.
///
/// Only the fields present in the body are changed.
///
/// # Access Control
/// - `doctor`, `nurse` - Clinical staff (and admins) can manage devices
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Monitoring device ID
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated monitoring device
/// - `400 Bad Request` - Invalid body or ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live monitoring device with that ID
#[utoipa::path(
    put,
    path = "/api/monitoring-devices/{id}",
    tag = MONITORING_DEVICE_TAG,
    params(("id" = Uuid, Path, description = "Monitoring device ID")),
    request_body = UpdateMonitoringDeviceDto,
    responses(
        (status = 200, description = "Updated monitoring device", body = MonitoringDeviceDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Monitoring device not found", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_monitoring_device(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(payload): ValidJson<UpdateMonitoringDeviceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await?;

    let params = UpdateMonitoringDeviceParams::from_dto(payload)?;
    let monitoring_device = MonitoringDeviceService::new(&state.db, &state.cache)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Monitoring device not found".to_string()))?;

    Ok(Json(monitoring_device.into_dto()))
}

/// Delete a monitoring device.
///
/// The row is soft-deleted and disappears from every read.
///
/// # Access Control
/// - `doctor`, `nurse` - Clinical staff (and admins) can manage devices
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Monitoring device ID
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live monitoring device with that ID
#[utoipa::path(
    delete,
    path = "/api/monitoring-devices/{id}",
    tag = MONITORING_DEVICE_TAG,
    params(("id" = Uuid, Path, description = "Monitoring device ID")),
    responses(
        (status = 204, description = "Deleted monitoring device"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Monitoring device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_monitoring_device(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await?;

    if !MonitoringDeviceService::new(&state.db, &state.cache).delete(id).await? {
        return Err(AppError::NotFound("Monitoring device not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
