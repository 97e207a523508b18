//! Billing and insurance: process_billing_insurance

use super::handler::CapabilityHandler;
use hospital_domain::{CapabilityCall, CapabilityDeclaration, CapabilityGroup, CapabilityParameter};
use serde_json::json;

pub const PROCESS_BILLING_INSURANCE: &str = "process_billing_insurance";

#[derive(Debug, Clone, Default)]
pub struct BillingHandler;

impl CapabilityHandler for BillingHandler {
    fn declaration(&self) -> CapabilityDeclaration {
        CapabilityDeclaration::new(
            PROCESS_BILLING_INSURANCE,
            "Mengelola penagihan, klaim asuransi, dan pertanyaan pembayaran.",
            CapabilityGroup::Billing,
        )
        .with_parameter(CapabilityParameter::new("patientName", "Nama pasien.", true))
        .with_parameter(
            CapabilityParameter::new("action", "Tindakan keuangan.", true).with_allowed_values([
                "create_invoice",
                "check_insurance",
                "process_payment",
                "inquiry",
            ]),
        )
        .with_parameter(CapabilityParameter::new(
            "details",
            "Detail polis atau jumlah pembayaran.",
            false,
        ))
    }

    fn handle(&self, call: &CapabilityCall) -> serde_json::Value {
        json!({
            "status": "processed",
            "message": format!(
                "Transaksi Keuangan ({}) untuk {} selesai. Status asuransi diverifikasi. Rincian tagihan telah diperbarui di buku besar.",
                call.string_or("action", ""),
                call.string_or("patientName", "")
            ),
            "balanceDue": "IDR 0",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload() {
        let call = CapabilityCall::new(PROCESS_BILLING_INSURANCE)
            .with_arg("patientName", "Budi Santoso")
            .with_arg("action", "check_insurance");

        let payload = BillingHandler.handle(&call);

        assert_eq!(payload["status"], "processed");
        assert_eq!(payload["balanceDue"], "IDR 0");
        assert!(
            payload["message"]
                .as_str()
                .unwrap()
                .contains("(check_insurance) untuk Budi Santoso")
        );
    }
}
