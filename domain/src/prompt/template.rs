//! Prompt templates and fixed replies for the orchestrator

/// Templates for the orchestrator conversation
pub struct PromptTemplate;

impl PromptTemplate {
    /// Static system instruction sent with every model request
    pub fn orchestrator_system() -> &'static str {
        r#"Anda adalah "Mengelola Operasi Rumah Sakit", orkestrator agen cerdas untuk Rumah Sakit INDUK.

Tugas Utama Anda:
1. Pahami permintaan pengguna terkait operasi rumah sakit.
2. Rutekan secara akurat ke sub-agen (tools) yang tepat:
   - Manajemen Pasien (manage_patient): Penerimaan, pemulangan, lokasi/status pasien.
   - Penjadwalan Janji Temu (manage_appointment): Booking, reschedule, cancel janji temu.
   - Rekam Medis (access_medical_records): Riwayat medis, hasil tes, diagnosis. (Jaga privasi).
   - Penagihan dan Asuransi (process_billing_insurance): Penagihan, klaim, pembayaran.
3. Jika permintaan ambigu, mintalah klarifikasi.
4. Setelah tool dieksekusi, sampaikan hasilnya kembali kepada pengguna dengan bahasa yang profesional, jelas, dan empati.

JANGAN berhalusinasi data. Gunakan output dari tool untuk menjawab."#
    }

    /// Reply when any model round trip fails
    pub fn system_failure() -> &'static str {
        "Maaf, terjadi kesalahan sistem saat menghubungi Agen Pusat. Silakan coba lagi."
    }

    /// Reply when the model answers directly with no text
    pub fn empty_direct_answer() -> &'static str {
        "Maaf, saya tidak mengerti permintaan Anda."
    }

    /// Reply when the final answer after a capability has no text
    pub fn empty_final_answer() -> &'static str {
        "Operasi selesai, namun tidak ada respons teks."
    }

    /// First message of a fresh transcript
    pub fn welcome() -> &'static str {
        "Selamat datang di Sistem Agen Cerdas Rumah Sakit INDUK. Saya adalah Orkestrator Operasional.\n\n\
         Saya dapat membantu Anda menghubungkan ke divisi:\n\
         • Manajemen Pasien\n\
         • Penjadwalan Janji Temu\n\
         • Rekam Medis\n\
         • Penagihan & Asuransi\n\n\
         Silakan pilih salah satu aksi cepat atau ketik permintaan Anda."
    }

    /// First message after a reset
    pub fn reset_notice() -> &'static str {
        "Sistem telah di-reset. Ada yang bisa saya bantu terkait operasional rumah sakit?"
    }
}

/// A canned request offered as a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub prompt: &'static str,
}

/// Shortcuts for the most common requests, one per division
pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Daftar Pasien",
        prompt: "Tolong daftarkan pasien baru bernama Budi Santoso, keluhan demam tinggi.",
    },
    QuickAction {
        label: "Jadwal Dokter",
        prompt: "Saya ingin menjadwalkan pertemuan dengan dr. Siti untuk Budi Santoso besok jam 10 pagi.",
    },
    QuickAction {
        label: "Cek Riwayat Medis",
        prompt: "Bisa tolong cek riwayat medis dan hasil tes terakhir pasien Budi Santoso?",
    },
    QuickAction {
        label: "Cek Tagihan",
        prompt: "Berapa total tagihan asuransi untuk pasien Budi Santoso?",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_names_every_capability() {
        let system = PromptTemplate::orchestrator_system();
        for name in [
            "manage_patient",
            "manage_appointment",
            "access_medical_records",
            "process_billing_insurance",
        ] {
            assert!(system.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_quick_actions_mention_patient() {
        assert!(QUICK_ACTIONS.iter().all(|a| a.prompt.contains("Budi Santoso")));
    }
}
