use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use super::representations::SymptomDto;
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResult, AuthUser};

/// GET /api/symptoms/:id
pub async fn show(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SymptomDto>> {
    let symptom = state
        .store
        .find_symptom(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Symptom {} not found", id)))?;

    Ok(Json(SymptomDto::from(&symptom)))
}
