// Ring 2: Business - a contact person must be reachable or identifiable
use async_trait::async_trait;

use crate::observer::context::ObserverContext;
use crate::observer::error::ObserverError;
use crate::observer::traits::{Observer, ObserverRing, Operation, Resource};

pub const CONTACT_WAYS: [&str; 4] = ["phone", "mobilePhone", "email", "identificationHint"];

/// Requires at least one contact channel unless an identification hint is given
pub struct ContactWaysRule;

#[async_trait]
impl Observer for ContactWaysRule {
    fn name(&self) -> &'static str {
        "ContactWaysRule"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::Business
    }

    fn applies_to(&self, resource: Resource, _operation: Operation) -> bool {
        matches!(resource, Resource::ContactPerson)
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        if CONTACT_WAYS.iter().any(|field| ctx.has(field)) {
            return Ok(());
        }

        for field in CONTACT_WAYS {
            ctx.reject(field, "ContactWays");
        }
        Ok(())
    }
}
