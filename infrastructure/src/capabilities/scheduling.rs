//! Appointment scheduling: manage_appointment

use super::handler::CapabilityHandler;
use hospital_domain::{CapabilityCall, CapabilityDeclaration, CapabilityGroup, CapabilityParameter};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};

pub const MANAGE_APPOINTMENT: &str = "manage_appointment";

const FIRST_APPOINTMENT_ID: u64 = 1001;

/// Booking, rescheduling and cancellation
///
/// Appointment ids come from a per-handler counter so runs are reproducible.
#[derive(Debug)]
pub struct SchedulingHandler {
    next_id: AtomicU64,
}

impl Default for SchedulingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingHandler {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(FIRST_APPOINTMENT_ID),
        }
    }
}

impl CapabilityHandler for SchedulingHandler {
    fn declaration(&self) -> CapabilityDeclaration {
        CapabilityDeclaration::new(
            MANAGE_APPOINTMENT,
            "Menangani penjadwalan, termasuk pemesanan (booking), penjadwalan ulang (reschedule), dan pembatalan (cancel) janji temu.",
            CapabilityGroup::Scheduling,
        )
        .with_parameter(
            CapabilityParameter::new("action", "Tindakan penjadwalan.", true).with_allowed_values([
                "book",
                "reschedule",
                "cancel",
                "check_availability",
            ]),
        )
        .with_parameter(CapabilityParameter::new("patientName", "Nama pasien.", true))
        .with_parameter(CapabilityParameter::new(
            "doctorName",
            "Nama dokter (opsional).",
            false,
        ))
        .with_parameter(CapabilityParameter::new(
            "date",
            "Tanggal dan waktu yang diminta.",
            false,
        ))
        .with_parameter(CapabilityParameter::new("reason", "Alasan kunjungan.", false))
    }

    fn handle(&self, call: &CapabilityCall) -> serde_json::Value {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let date = match call.string_or("date", "") {
            "" => "tanggal yang tersedia",
            date => date,
        };
        json!({
            "status": "confirmed",
            "message": format!(
                "Sistem Penjadwalan: Permintaan '{}' untuk {} pada {} berhasil diproses. Notifikasi konfirmasi telah dikirim.",
                call.string_or("action", ""),
                call.string_or("patientName", ""),
                date
            ),
            "appointmentId": format!("APT-{}", id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> CapabilityCall {
        CapabilityCall::new(MANAGE_APPOINTMENT)
            .with_arg("action", "book")
            .with_arg("patientName", "Siti Aminah")
    }

    #[test]
    fn test_date_fallback() {
        let handler = SchedulingHandler::new();

        let payload = handler.handle(&booking());
        assert!(
            payload["message"]
                .as_str()
                .unwrap()
                .contains("tanggal yang tersedia")
        );

        let payload = handler.handle(&booking().with_arg("date", "Senin, 10:00"));
        assert!(payload["message"].as_str().unwrap().contains("Senin, 10:00"));
    }

    #[test]
    fn test_appointment_ids_increase() {
        let handler = SchedulingHandler::new();
        assert_eq!(handler.handle(&booking())["appointmentId"], "APT-1001");
        assert_eq!(handler.handle(&booking())["appointmentId"], "APT-1002");
    }
}
