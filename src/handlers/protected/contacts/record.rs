use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use super::load_contact;
use super::representations::{ContactDto, ContactInput};
use crate::app::AppState;
use crate::error::ApiError;
use crate::handlers::{accept, context};
use crate::i18n::Locale;
use crate::middleware::{ApiResult, AuthUser, JsonBody};
use crate::observer::{Operation, Resource};

/// GET /api/contacts/:id
pub async fn show(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ContactDto>> {
    let contact = load_contact(&state, auth.person()?, id).await?;
    Ok(Json(ContactDto::from(&contact)))
}

/// PUT /api/contacts/:id
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    locale: Locale,
    Path(id): Path<Uuid>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Json<ContactDto>> {
    let mut contact = load_contact(&state, auth.person()?, id).await?;

    let ctx = context(&state, Resource::ContactPerson, Operation::Update, body)?;
    let input: ContactInput = accept(&state, locale, ctx).await?;

    input.apply_to(&mut contact);
    state.store.save_contact(&mut contact).await?;

    Ok(Json(ContactDto::from(&contact)))
}

/// DELETE /api/contacts/:id - 204 on success
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let contact = load_contact(&state, auth.person()?, id).await?;

    if !state.store.delete_contact(contact.id).await? {
        return Err(ApiError::not_found(format!("Contact {} not found", id)));
    }

    tracing::debug!("Contact {} removed by {}", contact.id, auth.username);
    Ok(StatusCode::NO_CONTENT)
}
