// Ring 3: Enrichment - derive the quarantine end from the configured period
use async_trait::async_trait;
use chrono::Duration;
use serde_json::Value;

use crate::observer::context::ObserverContext;
use crate::observer::error::ObserverError;
use crate::observer::traits::{Observer, ObserverRing, Operation, Resource};
use crate::validation::patterns::ISO_DATE;

pub struct QuarantineEndDefaulter;

#[async_trait]
impl Observer for QuarantineEndDefaulter {
    fn name(&self) -> &'static str {
        "QuarantineEndDefaulter"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::Enrichment
    }

    fn applies_to(&self, resource: Resource, _operation: Operation) -> bool {
        matches!(resource, Resource::TrackedCase)
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        if ctx.has("quarantineEndDate") {
            return Ok(());
        }

        let Some(start) = ctx.date("quarantineStartDate") else {
            return Ok(());
        };

        // dates near the calendar's end have no representable quarantine end
        match Duration::try_days(ctx.settings.quarantine_period_days).and_then(|period| start.checked_add_signed(period)) {
            Some(end) => {
                tracing::debug!("Defaulting quarantine end to {}", end);
                ctx.payload
                    .insert("quarantineEndDate".to_string(), Value::String(end.format(ISO_DATE).to_string()));
            }
            None => ctx.reject("quarantineStartDate", "Date"),
        }
        Ok(())
    }
}
