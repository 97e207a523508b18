//! Medical records: access_medical_records

use super::handler::CapabilityHandler;
use hospital_domain::{CapabilityCall, CapabilityDeclaration, CapabilityGroup, CapabilityParameter};
use serde_json::json;

pub const ACCESS_MEDICAL_RECORDS: &str = "access_medical_records";

#[derive(Debug, Clone, Default)]
pub struct MedicalRecordsHandler;

impl CapabilityHandler for MedicalRecordsHandler {
    fn declaration(&self) -> CapabilityDeclaration {
        CapabilityDeclaration::new(
            ACCESS_MEDICAL_RECORDS,
            "Mengakses riwayat medis, hasil tes, dan diagnosis dengan protokol privasi yang ketat.",
            CapabilityGroup::MedicalRecords,
        )
        .with_parameter(CapabilityParameter::new("patientName", "Nama pasien.", true))
        .with_parameter(
            CapabilityParameter::new("queryType", "Jenis informasi medis yang diminta.", true)
                .with_allowed_values(["history", "test_results", "diagnosis"]),
        )
        .with_parameter(CapabilityParameter::new(
            "verificationCode",
            "Kode simulasi otorisasi (opsional).",
            false,
        ))
    }

    fn handle(&self, call: &CapabilityCall) -> serde_json::Value {
        json!({
            "status": "accessed",
            "securityLevel": "HIGH",
            "message": format!(
                "Akses Data Medis ({}) untuk {} diberikan. [DATA TERENKRIPSI: Diagnosis stabil, Hasil Darah Normal]. Privasi terjaga sesuai protokol RS.",
                call.string_or("queryType", ""),
                call.string_or("patientName", "")
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload() {
        let call = CapabilityCall::new(ACCESS_MEDICAL_RECORDS)
            .with_arg("patientName", "Budi Santoso")
            .with_arg("queryType", "test_results");

        let payload = MedicalRecordsHandler.handle(&call);

        assert_eq!(payload["status"], "accessed");
        assert_eq!(payload["securityLevel"], "HIGH");
        let message = payload["message"].as_str().unwrap();
        assert!(message.contains("(test_results)"));
        assert!(message.contains("Budi Santoso"));
    }
}
