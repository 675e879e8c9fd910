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
        comorbidity::{CreateComorbidityDto, ComorbidityDto, UpdateComorbidityDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission, DOCTORS},
        model::comorbidity::{CreateComorbidityParams, UpdateComorbidityParams},
        service::comorbidity::ComorbidityService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping comorbidity endpoints in OpenAPI documentation
pub static COMORBIDITY_TAG: &str = "comorbidity";

/// Create a comorbidity.
#[utoipa::path(
    post,
    path = "/api/comorbidities",
    tag = COMORBIDITY_TAG,
    request_body = CreateComorbidityDto,
    responses(
        (status = 201, description = "Created comorbidity", body = ComorbidityDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_comorbidity(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateComorbidityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    let params = CreateComorbidityParams::from_dto(payload)?;
    let comorbidity = ComorbidityService::new(&state.db, &state.cache).create(params).await?;

    Ok((StatusCode::CREATED, Json(comorbidity.into_dto())))
}

/// List all comorbidities.
#[utoipa::path(
    get,
    path = "/api/comorbidities",
    tag = COMORBIDITY_TAG,
    responses(
        (status = 200, description = "All comorbidities", body = Vec<ComorbidityDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_comorbidities(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let comorbidities = ComorbidityService::new(&state.db, &state.cache).get_all().await?;

    Ok(Json(
        comorbidities
            .into_iter()
            .map(|comorbidity| comorbidity.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a comorbidity by ID.
#[utoipa::path(
    get,
    path = "/api/comorbidities/{id}",
    tag = COMORBIDITY_TAG,
    params(("id" = Uuid, Path, description = "Comorbidity ID")),
    responses(
        (status = 200, description = "The comorbidity", body = ComorbidityDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Comorbidity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_comorbidity_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    let comorbidity = ComorbidityService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Comorbidity not found".to_string()))?;

    Ok(Json(comorbidity.into_dto()))
}

/// Update a comorbidity.
#[utoipa::path(
    put,
    path = "/api/comorbidities/{id}",
    tag = COMORBIDITY_TAG,
    params(("id" = Uuid, Path, description = "Comorbidity ID")),
    request_body = UpdateComorbidityDto,
    responses(
        (status = 200, description = "Updated comorbidity", body = ComorbidityDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Comorbidity not found", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_comorbidity(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(payload): ValidJson<UpdateComorbidityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    let params = UpdateComorbidityParams::from_dto(payload)?;
    let comorbidity = ComorbidityService::new(&state.db, &state.cache)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Comorbidity not found".to_string()))?;

    Ok(Json(comorbidity.into_dto()))
}

/// Delete a comorbidity.
#[utoipa::path(
    delete,
    path = "/api/comorbidities/{id}",
    tag = COMORBIDITY_TAG,
    params(("id" = Uuid, Path, description = "Comorbidity ID")),
    responses(
        (status = 204, description = "Deleted comorbidity"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Comorbidity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_comorbidity(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(DOCTORS)])
        .await?;

    if !ComorbidityService::new(&state.db, &state.cache).delete(id).await? {
        return Err(AppError::NotFound("Comorbidity not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
