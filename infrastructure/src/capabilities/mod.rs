//! Mock hospital back-ends.
//!
//! Each capability is a [`CapabilityHandler`] in its own module; the
//! [`CapabilityRegistry`] collects them and [`MockCapabilityExecutor`]
//! exposes the registry through the executor port.
//!
//! | Capability | Group | Module |
//! |------------|-------|--------|
//! | `manage_patient` | PatientAdmin | [`patient`] |
//! | `manage_appointment` | Scheduling | [`scheduling`] |
//! | `access_medical_records` | MedicalRecords | [`records`] |
//! | `process_billing_insurance` | Billing | [`billing`] |

pub mod billing;
pub mod patient;
pub mod records;
pub mod scheduling;

mod executor;
mod handler;
mod registry;
mod schema;

pub use billing::BillingHandler;
pub use executor::{DEFAULT_LATENCY, MockCapabilityExecutor};
pub use handler::CapabilityHandler;
pub use patient::PatientAdminHandler;
pub use records::MedicalRecordsHandler;
pub use registry::CapabilityRegistry;
pub use scheduling::SchedulingHandler;
pub use schema::JsonSchemaCapabilityConverter;
