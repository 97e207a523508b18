//! Capability domain module
//!
//! A **capability** (a.k.a. tool) is a declared, schema-typed action the
//! model may request. Each capability belongs to exactly one
//! [`CapabilityGroup`], the sub-agent it acts for.
//!
//! ```text
//! ┌───────────────────┐    ┌────────────────┐    ┌──────────────────┐
//! │ CapabilityCatalog │───▶│ CapabilityCall │───▶│ CapabilityResult │
//! │ (declarations)    │    │ (invocation)   │    │ (group, payload) │
//! └───────────────────┘    └────────────────┘    └──────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`CapabilityCatalog`]: ordered, name-unique set of declarations
//! - [`CapabilityDeclaration`]: name, description, parameters and group
//! - [`CapabilityCall`]: an invocation request with arguments
//! - [`CapabilityResult`]: group tag plus an opaque structured payload
//! - [`CapabilityValidator`]: advisory argument checks
//!
//! The executor port lives in the application layer and the mock
//! implementation in infrastructure.

pub mod catalog;
pub mod entities;
pub mod group;
pub mod validation;
pub mod value_objects;

pub use catalog::CapabilityCatalog;
pub use entities::{CapabilityCall, CapabilityDeclaration, CapabilityParameter};
pub use group::CapabilityGroup;
pub use validation::{
    ArgumentIssue, CapabilityValidator, DefaultCapabilityValidator, fill_missing_required,
};
pub use value_objects::CapabilityResult;
