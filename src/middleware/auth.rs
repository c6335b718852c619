use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::app::AppState;
use crate::auth::{bearer_token, validate_jwt, Claims};
use crate::domain::Role;
use crate::error::ApiError;

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
    pub role: Role,
}

impl AuthUser {
    /// Department of an agent, 403 for any other role
    pub fn department(&self) -> Result<Uuid, ApiError> {
        match self.role {
            Role::Agent { department_id } => Ok(department_id),
            Role::TrackedPerson { .. } => Err(ApiError::forbidden("Only health department agents may access cases")),
        }
    }

    /// Tracked person behind the account, 403 for any other role
    pub fn person(&self) -> Result<Uuid, ApiError> {
        match self.role {
            Role::TrackedPerson { person_id } => Ok(person_id),
            Role::Agent { .. } => Err(ApiError::forbidden("Only tracked persons may manage contacts")),
        }
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.sub,
            role: claims.role,
        }
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let token = bearer_token(header)?;
    let claims = validate_jwt(token, &state.config.security)?;

    tracing::debug!("Authenticated {} as {:?}", claims.sub, claims.role);

    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}
