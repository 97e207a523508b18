//! Capability schema conversion port.
//!
//! Separates "which capabilities exist" (domain) from "how to serialize
//! them for the model API" (infrastructure).

use hospital_domain::{CapabilityCatalog, CapabilityDeclaration};

/// Port for converting capability declarations to provider-neutral JSON Schema.
pub trait CapabilitySchemaPort: Send + Sync {
    /// Convert a single declaration.
    fn declaration_to_schema(&self, declaration: &CapabilityDeclaration) -> serde_json::Value;

    /// Convert the whole catalog, preserving registry order.
    fn catalog_schema(&self, catalog: &CapabilityCatalog) -> Vec<serde_json::Value> {
        catalog
            .declarations()
            .iter()
            .map(|d| self.declaration_to_schema(d))
            .collect()
    }
}
