//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the language model driving the orchestrator
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
