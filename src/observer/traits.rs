use async_trait::async_trait;
use std::time::Duration;

use crate::observer::context::ObserverContext;
use crate::observer::error::ObserverError;

/// Observer rings, executed in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ObserverRing {
    Preparation = 0,     // Normalize blanks, strip read-only fields
    InputValidation = 1, // Required fields, field formats
    Business = 2,        // Conditional domain rules
    Enrichment = 3,      // Defaults derived from other fields
}

impl ObserverRing {
    pub const ALL: [ObserverRing; 4] = [
        ObserverRing::Preparation,
        ObserverRing::InputValidation,
        ObserverRing::Business,
        ObserverRing::Enrichment,
    ];
}

/// Write operations a payload can be submitted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

/// The kind of resource a payload describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    TrackedCase,
    ContactPerson,
    Symptom,
    Comment,
}

#[async_trait]
pub trait Observer: Send + Sync {
    /// Observer name for logging and debugging
    fn name(&self) -> &'static str;

    /// Which ring this observer belongs to
    fn ring(&self) -> ObserverRing;

    /// Check if observer applies to this resource and operation
    fn applies_to(&self, resource: Resource, operation: Operation) -> bool;

    /// Execution timeout (default 5 seconds)
    fn timeout(&self) -> Duration {
        Duration::from_secs(5)
    }

    /// Priority within ring (lower numbers execute first)
    fn priority(&self) -> u8 {
        50
    }

    async fn execute(&self, ctx: &mut ObserverContext) -> Result<(), ObserverError>;
}
