use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::auth::AuthService,
        state::AppState,
        util::extract::ValidJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

const TOKEN_TYPE: &str = "Bearer";

/// Exchange credentials for an access token.
///
/// Verifies the username and password and returns a signed JWT together with the
/// authenticated user. Unknown usernames and wrong passwords get the same response.
///
/// # Arguments
/// - `state` - Application state containing the database and token service
/// - `payload` - Username and password
///
/// # Returns
/// - `200 OK` - Access token and user
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Invalid username or password
/// - `500 Internal Server Error` - Database or signing failure
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.tokens)
        .authenticate(&payload.username, &payload.password)
        .await?;

    Ok(Json(TokenDto {
        access_token: token.token,
        token_type: TOKEN_TYPE.to_string(),
        expires_in: token.expires_in,
        user: user.into_dto(),
    }))
}

/// Get the currently authenticated user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The user the token belongs to
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AnyRole(&[])])
        .await?;

    Ok(Json(user.into_dto()))
}
