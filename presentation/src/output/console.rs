//! Console output formatter for chat messages and turn outcomes

use chrono::{DateTime, Local, Utc};
use colored::{ColoredString, Colorize};
use hospital_application::TurnOutcome;
use hospital_domain::{CapabilityGroup, Message, ProcessingState, QUICK_ACTIONS, Sender};
use serde_json::json;

/// Formats transcript messages and outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One transcript message: `[HH:MM] <badge> text`
    pub fn format_message(message: &Message) -> String {
        let time = Self::local_time(&message.timestamp).dimmed();
        let badge = match message.sender {
            Sender::User => "Anda".bold().white(),
            Sender::Agent => Self::group_badge(message.group.unwrap_or_default()),
        };
        format!(
            "{} {}\n{}",
            time,
            badge,
            Self::indent(&message.text, "  ")
        )
    }

    /// Colored label for the group that answered
    pub fn group_badge(group: CapabilityGroup) -> ColoredString {
        let label = format!("[{}]", group.label());
        match group {
            CapabilityGroup::Orchestrator => label.cyan().bold(),
            CapabilityGroup::PatientAdmin => label.blue().bold(),
            CapabilityGroup::Scheduling => label.magenta().bold(),
            CapabilityGroup::MedicalRecords => label.red().bold(),
            CapabilityGroup::Billing => label.green().bold(),
        }
    }

    /// Outcome of a single-shot turn as JSON
    pub fn format_json(outcome: &TurnOutcome) -> String {
        let value = json!({
            "text": outcome.text,
            "group": outcome.group,
            "group_label": outcome.group.label(),
            "capability": outcome.capability,
            "discarded_calls": outcome.discarded_calls,
            "failed": outcome.failed,
            "events": outcome.events,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Processing state and history size for `/status`
    pub fn format_status(state: &ProcessingState, history_len: usize) -> String {
        let status = if state.is_thinking {
            "Sedang Memproses...".yellow()
        } else {
            "Menunggu Input".green()
        };
        format!(
            "{} {}\n{} {}\n{} {}",
            "Status:".cyan().bold(),
            status,
            "Agen aktif:".cyan().bold(),
            Self::group_badge(state.display_group()),
            "Riwayat:".cyan().bold(),
            history_len
        )
    }

    /// Numbered list of the quick actions
    pub fn format_quick_actions() -> String {
        QUICK_ACTIONS
            .iter()
            .enumerate()
            .map(|(i, action)| {
                format!(
                    "  {}. {:<18} {}",
                    i + 1,
                    action.label,
                    action.prompt.dimmed()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Banner printed when the chat starts
    pub fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn local_time(timestamp: &DateTime<Utc>) -> String {
        timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_domain::PhaseEvent;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_agent_message() {
        plain();
        let message = Message::agent(2, "Jadwal dikonfirmasi.", CapabilityGroup::Scheduling);
        let out = ConsoleFormatter::format_message(&message);
        assert!(out.contains("[Penjadwalan Janji Temu]"));
        assert!(out.contains("  Jadwal dikonfirmasi."));
        // HH:MM prefix
        assert_eq!(out.as_bytes()[2], b':');
    }

    #[test]
    fn test_format_user_message() {
        plain();
        let message = Message::user(1, "Halo");
        let out = ConsoleFormatter::format_message(&message);
        assert!(out.contains("Anda"));
        assert!(out.ends_with("  Halo"));
    }

    #[test]
    fn test_format_json() {
        let outcome = TurnOutcome {
            text: "Tagihan lunas.".to_string(),
            group: CapabilityGroup::Billing,
            capability: Some("process_billing_insurance".to_string()),
            discarded_calls: 0,
            failed: false,
            events: vec![PhaseEvent::DecisionStarted],
        };
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&outcome)).unwrap();
        assert_eq!(value["text"], "Tagihan lunas.");
        assert_eq!(value["group"], "billing");
        assert_eq!(value["group_label"], "Penagihan dan Asuransi");
        assert_eq!(value["capability"], "process_billing_insurance");
        assert_eq!(value["events"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_format_status() {
        plain();
        let idle = ConsoleFormatter::format_status(&ProcessingState::idle(), 4);
        assert!(idle.contains("Menunggu Input"));
        assert!(idle.contains("[Orkestrator Pusat]"));
        assert!(idle.ends_with("4"));
    }

    #[test]
    fn test_quick_actions_are_numbered() {
        plain();
        let out = ConsoleFormatter::format_quick_actions();
        assert_eq!(out.lines().count(), 4);
        assert!(out.starts_with("  1. Daftar Pasien"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
