use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use super::load_case;
use super::representations::{TrackedCaseDto, TrackedCaseInput};
use crate::app::AppState;
use crate::handlers::{accept, context};
use crate::i18n::Locale;
use crate::middleware::{ApiResult, AuthUser, JsonBody};
use crate::observer::{Operation, Resource};

/// GET /api/hd/cases/:id
pub async fn show(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TrackedCaseDto>> {
    let case = load_case(&state, auth.department()?, id).await?;
    Ok(Json(TrackedCaseDto::from(&case)))
}

/// PUT /api/hd/cases/:id - replace the case's client-owned fields
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    locale: Locale,
    Path(id): Path<Uuid>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Json<TrackedCaseDto>> {
    let mut case = load_case(&state, auth.department()?, id).await?;

    let ctx = context(&state, Resource::TrackedCase, Operation::Update, body)?
        .with_enrollment_completed(case.enrollment.is_completed());
    let input: TrackedCaseInput = accept(&state, locale, ctx).await?;

    input.apply_to(&mut case);
    state.store.save_case(&mut case).await?;

    tracing::debug!("Case {} updated by {}", case.id, auth.username);
    Ok(Json(TrackedCaseDto::from(&case)))
}

/// DELETE /api/hd/cases/:id - conclude the case, 409 when already concluded
pub async fn conclude(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TrackedCaseDto>> {
    let mut case = load_case(&state, auth.department()?, id).await?;

    case.conclude()?;
    state.store.save_case(&mut case).await?;

    tracing::info!("Case {} concluded by {}", case.id, auth.username);
    Ok(Json(TrackedCaseDto::from(&case)))
}
