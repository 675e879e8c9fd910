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
        alert::{CreateAlertDto, AlertDto, UpdateAlertDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission, CLINICAL_STAFF},
        model::alert::{CreateAlertParams, UpdateAlertParams},
        service::alert::AlertService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping alert endpoints in OpenAPI documentation
pub static ALERT_TAG: &str = "alert";

/// Create a alert.
#[utoipa::path(
    post,
    path = "/api/alerts",
    tag = ALERT_TAG,
    request_body = CreateAlertDto,
    responses(
        (status = 201, description = "Created alert", body = AlertDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateAlertDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await?;

    let params = CreateAlertParams::from_dto(payload)?;
    let alert = AlertService::new(&state.db, &state.cache).create(params).await?;

    Ok((StatusCode::CREATED, Json(alert.into_dto())))
}

/// List all alerts.
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = ALERT_TAG,
    responses(
        (status = 200, description = "All alerts", body = Vec<AlertDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let alerts = AlertService::new(&state.db, &state.cache).get_all().await?;

    Ok(Json(
        alerts
            .into_iter()
            .map(|alert| alert.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a alert by ID.
#[utoipa::path(
    get,
    path = "/api/alerts/{id}",
    tag = ALERT_TAG,
    params(("id" = Uuid, Path, description = "Alert ID")),
    responses(
        (status = 200, description = "The alert", body = AlertDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_alert_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let alert = AlertService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Alert not found".to_string()))?;

    Ok(Json(alert.into_dto()))
}

/// Update a alert.
#[utoipa::path(
    put,
    path = "/api/alerts/{id}",
    tag = ALERT_TAG,
    params(("id" = Uuid, Path, description = "Alert ID")),
    request_body = UpdateAlertDto,
    responses(
        (status = 200, description = "Updated alert", body = AlertDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(payload): ValidJson<UpdateAlertDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await?;

    let params = UpdateAlertParams::from_dto(payload)?;
    let alert = AlertService::new(&state.db, &state.cache)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Alert not found".to_string()))?;

    Ok(Json(alert.into_dto()))
}

/// Delete a alert.
#[utoipa::path(
    delete,
    path = "/api/alerts/{id}",
    tag = ALERT_TAG,
    params(("id" = Uuid, Path, description = "Alert ID")),
    responses(
        (status = 204, description = "Deleted alert"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await?;

    if !AlertService::new(&state.db, &state.cache).delete(id).await? {
        return Err(AppError::NotFound("Alert not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Acknowledge an alert.
///
/// Records the calling user and the current time on the alert. Acknowledging an
/// alert twice keeps the first acknowledgement.
///
/// # Access Control
/// - `doctor`, `nurse` - Clinical staff (and admins) can acknowledge alerts
///
/// # Returns
/// - `200 OK` - The acknowledged alert
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live alert with that ID
#[utoipa::path(
    put,
    path = "/api/alerts/{id}/acknowledge",
    tag = ALERT_TAG,
    params(("id" = Uuid, Path, description = "Alert ID")),
    responses(
        (status = 200, description = "Acknowledged alert", body = AlertDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn acknowledge_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(CLINICAL_STAFF)])
        .await?;

    let alert = AlertService::new(&state.db, &state.cache)
        .acknowledge(id, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Alert not found".to_string()))?;

    Ok(Json(alert.into_dto()))
}
