// Observer pipeline executing registered observers ring by ring

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::time::Instant;
use tokio::time::timeout;

use crate::observer::context::ObserverContext;
use crate::observer::error::ObserverError;
use crate::observer::implementations;
use crate::observer::traits::{Observer, ObserverRing};
use crate::validation::ValidationErrors;

/// Result of running a payload through the pipeline
#[derive(Debug)]
pub enum PipelineOutcome {
    Accepted(Map<String, Value>),
    Rejected(ValidationErrors),
}

pub struct ObserverPipeline {
    observers: BTreeMap<ObserverRing, Vec<Box<dyn Observer>>>,
}

impl ObserverPipeline {
    /// Create new observer pipeline with empty observer registry
    pub fn new() -> Self {
        Self {
            observers: BTreeMap::new(),
        }
    }

    /// Pipeline with every built-in observer registered
    pub fn standard() -> Self {
        let mut pipeline = Self::new();
        implementations::register_all(&mut pipeline);
        pipeline
    }

    pub fn register_observer(&mut self, observer: Box<dyn Observer>) {
        let ring = observer.ring();
        let name = observer.name();
        let observers = self.observers.entry(ring).or_default();
        observers.push(observer);
        observers.sort_by_key(|o| o.priority());

        tracing::debug!("Registered observer '{}' for ring {:?}", name, ring);
    }

    pub async fn run(&self, mut ctx: ObserverContext) -> Result<PipelineOutcome, ObserverError> {
        let start_time = Instant::now();

        tracing::debug!(
            "Observer pipeline starting: resource={:?}, operation={:?}",
            ctx.resource,
            ctx.operation
        );

        for ring in ObserverRing::ALL {
            self.execute_ring(ring, &mut ctx).await?;

            if !ctx.errors.is_empty() {
                tracing::debug!(
                    "Observer pipeline stopped at ring {:?}, rejected fields: {:?}",
                    ring,
                    ctx.errors.fields().collect::<Vec<_>>()
                );
                return Ok(PipelineOutcome::Rejected(ctx.errors));
            }
        }

        tracing::debug!("Observer pipeline completed in {:?}", start_time.elapsed());
        Ok(PipelineOutcome::Accepted(ctx.payload))
    }

    async fn execute_ring(&self, ring: ObserverRing, ctx: &mut ObserverContext) -> Result<(), ObserverError> {
        let Some(observers) = self.observers.get(&ring) else {
            return Ok(());
        };

        for observer in observers {
            if !observer.applies_to(ctx.resource, ctx.operation) {
                tracing::trace!("Observer {} skipped for {:?}", observer.name(), ctx.resource);
                continue;
            }

            match timeout(observer.timeout(), observer.execute(ctx)).await {
                Ok(result) => result?,
                Err(_elapsed) => {
                    tracing::error!("Observer: {} timed out after {:?}", observer.name(), observer.timeout());
                    return Err(ObserverError::TimeoutError(format!(
                        "Observer {} timed out after {:?}",
                        observer.name(),
                        observer.timeout()
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for ObserverPipeline {
    fn default() -> Self {
        Self::new()
    }
}
