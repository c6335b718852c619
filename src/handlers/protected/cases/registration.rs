use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use super::load_case;
use super::representations::ActivationDto;
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResult, AuthUser};

/// GET /api/hd/cases/:id/registration - the pending activation code, if still valid
pub async fn show(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ActivationDto>> {
    let case = load_case(&state, auth.department()?, id).await?;

    match &case.activation {
        Some(activation) if !activation.is_expired(Utc::now()) => Ok(Json(ActivationDto::new(case.id, activation))),
        _ => Err(ApiError::not_found(format!("No pending registration for case {}", id))),
    }
}

/// PUT /api/hd/cases/:id/registration - start tracking, 409 unless the case allows it
pub async fn start_tracking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ActivationDto>> {
    let mut case = load_case(&state, auth.department()?, id).await?;

    let validity = state.config.tracking.activation_code_validity();
    let activation = case.start_tracking(Utc::now(), validity)?.clone();
    state.store.save_case(&mut case).await?;

    tracing::info!("Tracking started for case {} by {}", case.id, auth.username);
    Ok(Json(ActivationDto::new(case.id, &activation)))
}

/// POST /api/hd/cases/:id/registration/renewal - replace the pending activation code
pub async fn renew(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ActivationDto>> {
    let mut case = load_case(&state, auth.department()?, id).await?;

    let validity = state.config.tracking.activation_code_validity();
    let activation = case.renew(Utc::now(), validity)?.clone();
    state.store.save_case(&mut case).await?;

    tracing::info!("Registration renewed for case {} by {}", case.id, auth.username);
    Ok(Json(ActivationDto::new(case.id, &activation)))
}
