//! Capability Registry
//!
//! The [`CapabilityRegistry`] maps each capability name to its declaration
//! (and therefore its group) and to the handler that produces its payload.
//! Names are checked for uniqueness as handlers are registered.
//!
//! # Usage
//!
//! ```ignore
//! use hospital_infrastructure::capabilities::{CapabilityRegistry, BillingHandler};
//!
//! let registry = CapabilityRegistry::new().register(BillingHandler)?;
//!
//! let call = CapabilityCall::new("process_billing_insurance")
//!     .with_arg("patientName", "Budi Santoso")
//!     .with_arg("action", "inquiry");
//! let result = registry.dispatch(&call);
//! assert_eq!(result.group, CapabilityGroup::Billing);
//! ```

use super::billing::BillingHandler;
use super::handler::CapabilityHandler;
use super::patient::PatientAdminHandler;
use super::records::MedicalRecordsHandler;
use super::scheduling::SchedulingHandler;
use hospital_domain::{CapabilityCall, CapabilityCatalog, CapabilityResult, DomainError};
use std::collections::HashMap;
use std::sync::Arc;

pub struct CapabilityRegistry {
    catalog: CapabilityCatalog,
    handlers: HashMap<String, Arc<dyn CapabilityHandler>>,
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            catalog: CapabilityCatalog::new(),
            handlers: HashMap::new(),
        }
    }

    /// The four hospital back-ends, in catalog order:
    /// patient administration, scheduling, medical records, billing.
    pub fn hospital() -> Result<Self, DomainError> {
        Self::new()
            .register(PatientAdminHandler)?
            .register(SchedulingHandler::new())?
            .register(MedicalRecordsHandler)?
            .register(BillingHandler)
    }

    /// Register a handler; fails if its capability name is already taken.
    pub fn register<H: CapabilityHandler + 'static>(self, handler: H) -> Result<Self, DomainError> {
        self.register_arc(Arc::new(handler))
    }

    /// Register a handler (Arc version)
    pub fn register_arc(
        mut self,
        handler: Arc<dyn CapabilityHandler>,
    ) -> Result<Self, DomainError> {
        let declaration = handler.declaration();
        let name = declaration.name.clone();
        self.catalog = self.catalog.register(declaration)?;
        tracing::debug!(capability = %name, "Registered capability");
        self.handlers.insert(name, handler);
        Ok(self)
    }

    pub fn catalog(&self) -> &CapabilityCatalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route a call to its handler.
    ///
    /// Unregistered names yield the orchestrator-tagged failure result.
    pub fn dispatch(&self, call: &CapabilityCall) -> CapabilityResult {
        let name = call.capability_name.as_str();
        match (self.handlers.get(name), self.catalog.group_of(name)) {
            (Some(handler), Some(group)) => CapabilityResult::new(group, handler.handle(call)),
            _ => CapabilityResult::unknown(name),
        }
    }
}
