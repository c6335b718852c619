// Request handlers in two tiers:
// public (no auth) and protected (JWT auth, role checked per area)
pub mod protected;
pub mod public;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::i18n::Locale;
use crate::observer::{ObserverContext, Operation, PipelineOutcome, Resource};

/// Request bodies must be JSON objects
pub(crate) fn json_object(body: Value) -> Result<Map<String, Value>, ApiError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::bad_request("Request body must be a JSON object")),
    }
}

/// Runs a payload through the observer pipeline and binds the accepted result
/// to the typed input. Rejections become localized validation errors.
pub(crate) async fn accept<T: DeserializeOwned>(
    state: &AppState,
    locale: Locale,
    ctx: ObserverContext,
) -> Result<T, ApiError> {
    let resource = ctx.resource;
    match state.pipeline.run(ctx).await? {
        PipelineOutcome::Accepted(payload) => serde_json::from_value(Value::Object(payload)).map_err(|e| {
            tracing::warn!("Accepted {:?} payload failed to bind: {}", resource, e);
            ApiError::invalid_json("Request body does not have the expected shape")
        }),
        PipelineOutcome::Rejected(errors) => Err(ApiError::Validation(errors.localize(locale))),
    }
}

/// Starts an observer context for a request body
pub(crate) fn context(
    state: &AppState,
    resource: Resource,
    operation: Operation,
    body: Value,
) -> Result<ObserverContext, ApiError> {
    Ok(ObserverContext::new(
        resource,
        operation,
        json_object(body)?,
        state.pipeline_settings(),
    ))
}
