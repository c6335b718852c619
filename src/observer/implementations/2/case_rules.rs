// Ring 2: Business - conditional rules for tracked cases
use async_trait::async_trait;

use crate::observer::context::ObserverContext;
use crate::observer::error::ObserverError;
use crate::observer::traits::{Observer, ObserverRing, Operation, Resource};

/// A tracked person has to be reachable by phone
pub struct CasePhoneRule;

#[async_trait]
impl Observer for CasePhoneRule {
    fn name(&self) -> &'static str {
        "CasePhoneRule"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::Business
    }

    fn applies_to(&self, resource: Resource, _operation: Operation) -> bool {
        matches!(resource, Resource::TrackedCase)
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        if !ctx.has("phone") && !ctx.has("mobilePhone") {
            ctx.reject("phone", "TrackedCase.phoneOrMobile");
            ctx.reject("mobilePhone", "TrackedCase.phoneOrMobile");
        }
        Ok(())
    }
}

pub struct QuarantineOrderRule;

#[async_trait]
impl Observer for QuarantineOrderRule {
    fn name(&self) -> &'static str {
        "QuarantineOrderRule"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::Business
    }

    fn applies_to(&self, resource: Resource, _operation: Operation) -> bool {
        matches!(resource, Resource::TrackedCase)
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        if let (Some(start), Some(end)) = (ctx.date("quarantineStartDate"), ctx.date("quarantineEndDate")) {
            if end < start {
                ctx.reject("quarantineEndDate", "TrackedCase.quarantineEndBeforeStart");
            }
        }
        Ok(())
    }
}

/// Once enrollment is done the account details may no longer be removed
pub struct EnrollmentCompletenessRule;

const ACCOUNT_DETAILS: [&str; 2] = ["email", "dateOfBirth"];

#[async_trait]
impl Observer for EnrollmentCompletenessRule {
    fn name(&self) -> &'static str {
        "EnrollmentCompletenessRule"
    }

    fn ring(&self) -> ObserverRing {
        ObserverRing::Business
    }

    fn applies_to(&self, resource: Resource, operation: Operation) -> bool {
        matches!(resource, Resource::TrackedCase) && operation == Operation::Update
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        if !ctx.enrollment_completed {
            return Ok(());
        }

        for field in ACCOUNT_DETAILS {
            if !ctx.has(field) {
                ctx.reject(field, "TrackedCase.enrollmentCompleted");
            }
        }
        Ok(())
    }
}
