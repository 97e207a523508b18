//! Capability group value object

use serde::{Deserialize, Serialize};

/// The logical sub-agent that is speaking or acting (Value Object)
///
/// Every capability belongs to exactly one group. The group is used purely
/// for attribution: which division answered, and which indicator the UI
/// lights up while a capability is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityGroup {
    /// The top-level router that answers directly or delegates
    #[default]
    Orchestrator,
    /// Admission, discharge and patient location/status
    PatientAdmin,
    /// Appointment booking, rescheduling and cancellation
    Scheduling,
    /// Medical history, test results and diagnoses
    MedicalRecords,
    /// Invoices, insurance claims and payments
    Billing,
}

impl CapabilityGroup {
    /// All groups, orchestrator first.
    pub const ALL: [CapabilityGroup; 5] = [
        CapabilityGroup::Orchestrator,
        CapabilityGroup::PatientAdmin,
        CapabilityGroup::Scheduling,
        CapabilityGroup::MedicalRecords,
        CapabilityGroup::Billing,
    ];

    /// Stable machine identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityGroup::Orchestrator => "orchestrator",
            CapabilityGroup::PatientAdmin => "patient_admin",
            CapabilityGroup::Scheduling => "scheduling",
            CapabilityGroup::MedicalRecords => "medical_records",
            CapabilityGroup::Billing => "billing",
        }
    }

    /// Label shown to hospital staff
    pub fn label(&self) -> &'static str {
        match self {
            CapabilityGroup::Orchestrator => "Orkestrator Pusat",
            CapabilityGroup::PatientAdmin => "Manajemen Pasien",
            CapabilityGroup::Scheduling => "Penjadwalan Janji Temu",
            CapabilityGroup::MedicalRecords => "Rekam Medis",
            CapabilityGroup::Billing => "Penagihan dan Asuransi",
        }
    }

    pub fn is_orchestrator(&self) -> bool {
        matches!(self, CapabilityGroup::Orchestrator)
    }
}

impl std::fmt::Display for CapabilityGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for CapabilityGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CapabilityGroup::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("Unknown capability group: {}", s))
    }
}
