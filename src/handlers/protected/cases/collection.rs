use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::representations::{case_href, TrackedCaseDto, TrackedCaseInput, TrackedCaseSelect, CASES_PATH};
use crate::app::AppState;
use crate::error::ApiError;
use crate::hal::HalCollection;
use crate::handlers::{accept, context};
use crate::i18n::Locale;
use crate::middleware::{ApiResult, AuthUser, Created, JsonBody};
use crate::observer::{Operation, Resource};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub projection: Option<String>,
}

/// GET /api/hd/cases - cases of the department, by last name then first name
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Response> {
    let department_id = auth.department()?;
    let cases = state.store.cases_of_department(department_id).await?;

    let response = match query.projection.as_deref() {
        Some("select") => {
            let items: Vec<TrackedCaseSelect> = cases.iter().map(TrackedCaseSelect::from).collect();
            Json(HalCollection::new("cases", items, CASES_PATH)).into_response()
        }
        _ => {
            let items: Vec<TrackedCaseDto> = cases.iter().map(TrackedCaseDto::from).collect();
            Json(HalCollection::new("cases", items, CASES_PATH)).into_response()
        }
    };

    Ok(response)
}

/// POST /api/hd/cases - open a new case in the department
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    locale: Locale,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Created<TrackedCaseDto>> {
    let department_id = auth.department()?;
    let department = state
        .store
        .find_department(department_id)
        .await?
        .ok_or_else(|| ApiError::forbidden(format!("Department {} does not exist", department_id)))?;

    let ctx = context(&state, Resource::TrackedCase, Operation::Create, body)?;
    let input: TrackedCaseInput = accept(&state, locale, ctx).await?;

    let mut case = input.into_case(department.id);
    state.store.save_case(&mut case).await?;

    tracing::info!("Case {} opened in {} by {}", case.id, department.name, auth.username);
    Ok(Created::new(case_href(case.id), TrackedCaseDto::from(&case)))
}
