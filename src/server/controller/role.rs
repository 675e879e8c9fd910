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
        role::{CreateRoleDto, RoleDto, UpdateRoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::role::{CreateRoleParams, UpdateRoleParams},
        service::role::RoleService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping role endpoints in OpenAPI documentation
pub static ROLE_TAG: &str = "role";

/// Create a role.
///
/// # Access Control
/// - `Admin` - Only administrators can manage roles
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Role fields
///
/// # Returns
/// - `201 Created` - The created role
/// - `400 Bad Request` - Invalid body or referenced row missing
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `409 Conflict` - Unique value already taken
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = ROLE_TAG,
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Created role", body = RoleDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateRoleParams::from_dto(payload)?;
    let role = RoleService::new(&state.db, &state.cache).create(params).await?;

    Ok((StatusCode::CREATED, Json(role.into_dto())))
}

/// List all roles.
///
/// # Access Control
/// - `Admin` - Only administrators can read roles
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Every live role, oldest first
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "All roles", body = Vec<RoleDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let roles = RoleService::new(&state.db, &state.cache).get_all().await?;

    Ok(Json(
        roles
            .into_iter()
            .map(|role| role.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a role by ID.
///
/// # Access Control
/// - `Admin` - Only administrators can read roles
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Role ID
///
/// # Returns
/// - `200 OK` - The role
/// - `400 Bad Request` - ID is not a UUID
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live role with that ID
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = Uuid, Path, description = "Role ID")),
    responses(
        (status = 200, description = "The role", body = RoleDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_role_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let role = RoleService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

    Ok(Json(role.into_dto()))
}

/// Update a role.
///
/// Only the fields present in the body are changed.
///
/// # Access Control
/// - `Admin` - Only administrators can manage roles
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Role ID
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated role
/// - `400 Bad Request` - Invalid body or ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live role with that ID
#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = Uuid, Path, description = "Role ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Updated role", body = RoleDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 409, description = "Duplicate value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
    ValidJson(payload): ValidJson<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateRoleParams::from_dto(payload)?;
    let role = RoleService::new(&state.db, &state.cache)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

    Ok(Json(role.into_dto()))
}

/// Delete a role.
///
/// The row is soft-deleted and disappears from every read. The built-in `admin`,
/// `doctor` and `nurse` roles are refused.
///
/// # Access Control
/// - `Admin` - Only administrators can manage roles
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Role ID
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not allowed
/// - `404 Not Found` - No live role with that ID
/// - `409 Conflict` - Built-in roles cannot be deleted
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = Uuid, Path, description = "Role ID")),
    responses(
        (status = 204, description = "Deleted role"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 409, description = "Built-in role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidPath(id): ValidPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !RoleService::new(&state.db, &state.cache).delete(id).await? {
        return Err(AppError::NotFound("Role not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
