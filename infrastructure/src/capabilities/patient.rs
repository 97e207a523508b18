//! Patient administration: manage_patient

use super::handler::CapabilityHandler;
use hospital_domain::{CapabilityCall, CapabilityDeclaration, CapabilityGroup, CapabilityParameter};
use serde_json::json;

pub const MANAGE_PATIENT: &str = "manage_patient";

/// Admission, discharge and status lookups
#[derive(Debug, Clone, Default)]
pub struct PatientAdminHandler;

impl CapabilityHandler for PatientAdminHandler {
    fn declaration(&self) -> CapabilityDeclaration {
        CapabilityDeclaration::new(
            MANAGE_PATIENT,
            "Menangani tugas administrasi pasien termasuk penerimaan (admission), pemulangan (discharge), dan pengecekan status lokasi pasien.",
            CapabilityGroup::PatientAdmin,
        )
        .with_parameter(
            CapabilityParameter::new("action", "Tindakan yang akan dilakukan.", true)
                .with_allowed_values(["admission", "discharge", "check_status"]),
        )
        .with_parameter(CapabilityParameter::new("patientName", "Nama lengkap pasien.", true))
        .with_parameter(CapabilityParameter::new(
            "details",
            "Detail tambahan seperti alasan masuk, nomor kamar, atau kondisi saat pulang.",
            false,
        ))
    }

    fn handle(&self, call: &CapabilityCall) -> serde_json::Value {
        json!({
            "status": "success",
            "message": format!(
                "Administrasi Pasien Berhasil. Tindakan '{}' untuk pasien {} telah dicatat dalam sistem administrasi pusat.",
                call.string_or("action", ""),
                call.string_or("patientName", "")
            ),
            "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_echoes_arguments() {
        let call = CapabilityCall::new(MANAGE_PATIENT)
            .with_arg("action", "admission")
            .with_arg("patientName", "Budi Santoso");

        let payload = PatientAdminHandler.handle(&call);

        assert_eq!(payload["status"], "success");
        let message = payload["message"].as_str().unwrap();
        assert!(message.contains("'admission'"));
        assert!(message.contains("Budi Santoso"));
        assert!(payload["timestamp"].is_string());
    }

    #[test]
    fn test_declaration() {
        let decl = PatientAdminHandler.declaration();
        assert_eq!(decl.group, CapabilityGroup::PatientAdmin);
        assert_eq!(decl.required_parameters().count(), 2);
        assert!(decl.parameter("action").unwrap().is_enumerated());
    }
}
