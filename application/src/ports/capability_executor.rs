//! Capability executor port
//!
//! Defines the interface for running a capability on behalf of the model.

use async_trait::async_trait;
use hospital_domain::{CapabilityCall, CapabilityCatalog, CapabilityResult};

/// Port for capability execution
///
/// Infrastructure implements this with the mock hospital back-ends. An
/// executor never fails: unrecognized names and handler problems come back
/// as a [`CapabilityResult`] tagged with the orchestrator group and an
/// error payload.
#[async_trait]
pub trait CapabilityExecutorPort: Send + Sync {
    /// The declarations of everything this executor can run, in registry order
    fn catalog(&self) -> &CapabilityCatalog;

    /// Check if a capability is available
    fn has_capability(&self, name: &str) -> bool {
        self.catalog().contains(name)
    }

    /// Execute a capability call
    async fn execute(&self, call: &CapabilityCall) -> CapabilityResult;
}
