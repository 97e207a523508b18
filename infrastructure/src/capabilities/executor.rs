//! Mock capability executor: the concrete implementation of [`CapabilityExecutorPort`].
//!
//! [`MockCapabilityExecutor`] stands in for the hospital's back-end systems.
//! It waits for a configurable latency to imitate a downstream call, then
//! dispatches through the [`CapabilityRegistry`].

use super::registry::CapabilityRegistry;
use async_trait::async_trait;
use hospital_application::ports::capability_executor::CapabilityExecutorPort;
use hospital_domain::util::truncate_str;
use hospital_domain::{CapabilityCall, CapabilityCatalog, CapabilityResult};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default simulated latency of a back-end call
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

pub struct MockCapabilityExecutor {
    registry: CapabilityRegistry,
    latency: Duration,
}

impl MockCapabilityExecutor {
    pub fn new(registry: CapabilityRegistry) -> Self {
        Self {
            registry,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Set the simulated latency; zero disables the wait.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }
}

#[async_trait]
impl CapabilityExecutorPort for MockCapabilityExecutor {
    fn catalog(&self) -> &CapabilityCatalog {
        self.registry.catalog()
    }

    async fn execute(&self, call: &CapabilityCall) -> CapabilityResult {
        let start = Instant::now();
        let args = call.arguments_json().to_string();
        debug!(
            "Executing capability {} with {}",
            call.capability_name,
            truncate_str(&args, 200)
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let result = self.registry.dispatch(call);
        if result.is_failure() {
            warn!(
                "Capability {} failed: {}",
                call.capability_name,
                result.message().unwrap_or("(no message)")
            );
        } else {
            info!(
                "Capability {} completed by {} in {}ms",
                call.capability_name,
                result.group.as_str(),
                start.elapsed().as_millis()
            );
        }
        result
    }
}
