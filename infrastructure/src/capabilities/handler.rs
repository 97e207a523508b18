//! Capability handler trait.
//!
//! A handler owns one capability: it declares it and turns a call into the
//! structured payload the model reads back. Handlers are plain data
//! templating and never fail.

use hospital_domain::{CapabilityCall, CapabilityDeclaration};

pub trait CapabilityHandler: Send + Sync {
    /// Declaration exposed to the model; its `group` tags every result.
    fn declaration(&self) -> CapabilityDeclaration;

    /// Build the result payload for `call`.
    fn handle(&self, call: &CapabilityCall) -> serde_json::Value;
}
