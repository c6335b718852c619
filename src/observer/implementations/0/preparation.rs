// Ring 0: Preparation - normalizes the raw payload before validation
use async_trait::async_trait;
use serde_json::Value;

use crate::observer::context::ObserverContext;
use crate::observer::error::ObserverError;
use crate::observer::traits::{Observer, ObserverRing, Operation, Resource};

/// Fields owned by the server that clients may echo back but never set
const READ_ONLY_FIELDS: &[&str] = &[
    "id",
    "_links",
    "_embedded",
    "status",
    "comments",
    "enrollmentCompleted",
    "createdAt",
];

/// Drops server-owned fields from incoming payloads
pub struct ReadOnlyFieldFilter;

#[async_trait]
impl Observer for ReadOnlyFieldFilter {
    fn name(&self) -> &'static str {
        "ReadOnlyFieldFilter"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::Preparation
    }

    fn applies_to(&self, _resource: Resource, _operation: Operation) -> bool {
        true
    }

    fn priority(&self) -> u8 {
        10
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        for field in READ_ONLY_FIELDS {
            if ctx.payload.remove(*field).is_some() {
                tracing::trace!("Ignoring read-only field '{}'", field);
            }
        }
        Ok(())
    }
}

/// Trims strings and binds blank ones to null
pub struct BlankFieldNormalizer;

#[async_trait]
impl Observer for BlankFieldNormalizer {
    fn name(&self) -> &'static str {
        "BlankFieldNormalizer"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::Preparation
    }

    fn applies_to(&self, _resource: Resource, _operation: Operation) -> bool {
        true
    }

    fn priority(&self) -> u8 {
        20
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        for value in ctx.payload.values_mut() {
            let normalized = match value {
                Value::String(s) if s.trim().is_empty() => Value::Null,
                Value::String(s) => Value::String(s.trim().to_string()),
                _ => continue,
            };
            *value = normalized;
        }
        Ok(())
    }
}
