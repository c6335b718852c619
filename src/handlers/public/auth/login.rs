use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::auth::{generate_jwt, verify_password, AuthError};
use crate::middleware::{ApiResult, JsonBody};

/// Response header repeating the issued token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/login - Authenticate user credentials and receive a JWT
///
/// Unknown users and wrong passwords are both answered with 401.
pub async fn login(State(state): State<AppState>, JsonBody(request): JsonBody<LoginRequest>) -> ApiResult<impl IntoResponse> {
    let user = state.store.find_user(&request.username).await?;

    let user = match user {
        Some(user) if verify_password(&request.password, &user.password_hash) => user,
        _ => {
            tracing::warn!("Failed login attempt for '{}'", request.username);
            return Err(AuthError::InvalidCredentials.into());
        }
    };

    let token = generate_jwt(&user, &state.config.security)?;
    tracing::info!("User '{}' logged in", user.username);

    Ok(([(AUTH_TOKEN_HEADER, token.clone())], Json(LoginResponse { token })))
}
