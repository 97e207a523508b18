//! Ordered catalog of capability declarations

use super::entities::CapabilityDeclaration;
use super::group::CapabilityGroup;
use crate::core::error::DomainError;
use std::collections::HashMap;

/// The fixed set of capabilities exposed to the model
///
/// Declarations keep their registration order so that the catalog sent to
/// the model is identical across calls. Names are unique; registering a
/// duplicate is rejected.
#[derive(Debug, Clone, Default)]
pub struct CapabilityCatalog {
    declarations: Vec<CapabilityDeclaration>,
    index: HashMap<String, usize>,
}

impl CapabilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration (builder pattern)
    pub fn register(mut self, declaration: CapabilityDeclaration) -> Result<Self, DomainError> {
        if self.index.contains_key(&declaration.name) {
            return Err(DomainError::DuplicateCapability(declaration.name));
        }
        self.index
            .insert(declaration.name.clone(), self.declarations.len());
        self.declarations.push(declaration);
        Ok(self)
    }

    /// Build a catalog from declarations, rejecting duplicate names
    pub fn from_declarations(
        declarations: impl IntoIterator<Item = CapabilityDeclaration>,
    ) -> Result<Self, DomainError> {
        declarations
            .into_iter()
            .try_fold(Self::new(), |catalog, decl| catalog.register(decl))
    }

    /// All declarations in registration order
    pub fn declarations(&self) -> &[CapabilityDeclaration] {
        &self.declarations
    }

    pub fn get(&self, name: &str) -> Option<&CapabilityDeclaration> {
        self.index.get(name).map(|&i| &self.declarations[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|d| d.name.as_str())
    }

    /// Group that owns the named capability, if it is registered
    pub fn group_of(&self, name: &str) -> Option<CapabilityGroup> {
        self.get(name).map(|d| d.group)
    }

    /// Group for the named capability, defaulting to the orchestrator
    pub fn resolve_group(&self, name: &str) -> CapabilityGroup {
        self.group_of(name).unwrap_or(CapabilityGroup::Orchestrator)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CapabilityCatalog {
        CapabilityCatalog::from_declarations([
            CapabilityDeclaration::new("manage_patient", "Patients", CapabilityGroup::PatientAdmin),
            CapabilityDeclaration::new(
                "process_billing_insurance",
                "Billing",
                CapabilityGroup::Billing,
            ),
            CapabilityDeclaration::new(
                "manage_appointment",
                "Scheduling",
                CapabilityGroup::Scheduling,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(
            names,
            vec!["manage_patient", "process_billing_insurance", "manage_appointment"]
        );
        // Stable across calls
        let again: Vec<&str> = catalog.names().collect();
        assert_eq!(names, again);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = catalog().register(CapabilityDeclaration::new(
            "manage_patient",
            "Again",
            CapabilityGroup::Billing,
        ));
        match result {
            Err(DomainError::DuplicateCapability(name)) => assert_eq!(name, "manage_patient"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_group_resolution() {
        let catalog = catalog();
        assert_eq!(
            catalog.group_of("manage_appointment"),
            Some(CapabilityGroup::Scheduling)
        );
        assert_eq!(catalog.group_of("unknown_tool"), None);
        assert_eq!(
            catalog.resolve_group("unknown_tool"),
            CapabilityGroup::Orchestrator
        );
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("manage_patient"));
        assert!(CapabilityCatalog::new().is_empty());
    }
}
