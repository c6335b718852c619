use axum::{extract::State, Json};
use serde_json::Value;

use super::representations::{symptom_href, SymptomDto, SymptomInput, SYMPTOMS_PATH};
use crate::app::AppState;
use crate::domain::Symptom;
use crate::hal::HalCollection;
use crate::handlers::{accept, context};
use crate::i18n::Locale;
use crate::middleware::{ApiResult, AuthUser, Created, JsonBody};
use crate::observer::{Operation, Resource};

/// GET /api/symptoms - all symptoms by name
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> ApiResult<Json<HalCollection<SymptomDto>>> {
    let symptoms = state.store.symptoms().await?;
    let items: Vec<SymptomDto> = symptoms.iter().map(SymptomDto::from).collect();

    Ok(Json(HalCollection::new("symptoms", items, SYMPTOMS_PATH)))
}

/// POST /api/symptoms - a client supplied id is ignored
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    locale: Locale,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Created<SymptomDto>> {
    let ctx = context(&state, Resource::Symptom, Operation::Create, body)?;
    let input: SymptomInput = accept(&state, locale, ctx).await?;

    let symptom = Symptom::from(input);
    state.store.save_symptom(&symptom).await?;

    tracing::info!("Symptom '{}' added by {}", symptom.name, auth.username);
    Ok(Created::new(symptom_href(symptom.id), SymptomDto::from(&symptom)))
}
