//! Capability argument validation
//!
//! Validation is advisory: the model is trusted to respect the declared
//! schema, so issues are reported but never block a call. Missing required
//! fields are filled with empty strings by [`fill_missing_required`] before
//! the call reaches an executor.

use super::entities::{CapabilityCall, CapabilityDeclaration};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single problem found in a capability call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArgumentIssue {
    MissingRequired { parameter: String },
    UnknownParameter { parameter: String },
    ValueNotAllowed { parameter: String, value: String },
}

impl std::fmt::Display for ArgumentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentIssue::MissingRequired { parameter } => {
                write!(f, "missing required parameter '{}'", parameter)
            }
            ArgumentIssue::UnknownParameter { parameter } => {
                write!(f, "unknown parameter '{}'", parameter)
            }
            ArgumentIssue::ValueNotAllowed { parameter, value } => {
                write!(f, "value '{}' not allowed for '{}'", value, parameter)
            }
        }
    }
}

/// Validator for capability calls
///
/// Pure domain trait: checks a call against its declaration without I/O.
pub trait CapabilityValidator: Send + Sync {
    fn validate(
        &self,
        call: &CapabilityCall,
        declaration: &CapabilityDeclaration,
    ) -> Vec<ArgumentIssue>;
}

/// Default schema checks: required fields, unknown fields, enumerations
#[derive(Debug, Clone, Default)]
pub struct DefaultCapabilityValidator;

impl CapabilityValidator for DefaultCapabilityValidator {
    fn validate(
        &self,
        call: &CapabilityCall,
        declaration: &CapabilityDeclaration,
    ) -> Vec<ArgumentIssue> {
        let mut issues = Vec::new();

        for param in declaration.required_parameters() {
            if !call.arguments.contains_key(&param.name) {
                issues.push(ArgumentIssue::MissingRequired {
                    parameter: param.name.clone(),
                });
            }
        }

        let known: HashSet<&str> = declaration
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        // Sorted so that issue order does not depend on HashMap iteration
        let mut arg_names: Vec<&String> = call.arguments.keys().collect();
        arg_names.sort();

        for name in arg_names {
            if !known.contains(name.as_str()) {
                issues.push(ArgumentIssue::UnknownParameter {
                    parameter: name.clone(),
                });
                continue;
            }
            let Some(param) = declaration.parameter(name) else {
                continue;
            };
            if !param.is_enumerated() {
                continue;
            }
            if let Some(value) = call.get_string(name)
                && !param.allowed_values.iter().any(|v| v == value)
            {
                issues.push(ArgumentIssue::ValueNotAllowed {
                    parameter: name.clone(),
                    value: value.to_string(),
                });
            }
        }

        issues
    }
}

/// Return a copy of `call` where every missing required field is an empty string
pub fn fill_missing_required(
    call: &CapabilityCall,
    declaration: &CapabilityDeclaration,
) -> CapabilityCall {
    let mut filled = call.clone();
    for param in declaration.required_parameters() {
        filled
            .arguments
            .entry(param.name.clone())
            .or_insert_with(|| serde_json::Value::String(String::new()));
    }
    filled
}
