//! Phase-transition events emitted during one turn.
//!
//! A turn produces one of two event sequences:
//!
//! ```text
//! direct answer:  DecisionStarted ──────────────────────────────────────────▶ Completed
//! capability:     DecisionStarted ─▶ CapabilityStarted ─▶ CapabilityEnded ─▶ Completed
//! ```
//!
//! `ModelFailed` may appear before `Completed` on either path; when a
//! capability was started, `CapabilityEnded` is still emitted first.

use crate::capability::CapabilityGroup;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PhaseEvent {
    /// The conversation has been sent to the model in decision mode.
    DecisionStarted,
    /// A capability is about to execute on behalf of `group`.
    CapabilityStarted {
        group: CapabilityGroup,
        capability: String,
    },
    /// The capability finished, successfully or not.
    CapabilityEnded { group: CapabilityGroup },
    /// A model round trip failed; the turn falls back to an apology.
    ModelFailed { error: String },
    /// The turn is over.
    Completed { text: String, group: CapabilityGroup },
}

impl PhaseEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PhaseEvent::DecisionStarted => "decision_started",
            PhaseEvent::CapabilityStarted { .. } => "capability_started",
            PhaseEvent::CapabilityEnded { .. } => "capability_ended",
            PhaseEvent::ModelFailed { .. } => "model_failed",
            PhaseEvent::Completed { .. } => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PhaseEvent::Completed { .. })
    }
}

/// Where the engine is within a turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "group", rename_all = "snake_case")]
pub enum TurnPhase {
    #[default]
    Idle,
    AwaitingModelDecision,
    InvokingCapability(CapabilityGroup),
    AwaitingFinalAnswer,
}

impl TurnPhase {
    /// Phase reached after `event`
    pub fn after(self, event: &PhaseEvent) -> TurnPhase {
        match event {
            PhaseEvent::DecisionStarted => TurnPhase::AwaitingModelDecision,
            PhaseEvent::CapabilityStarted { group, .. } => TurnPhase::InvokingCapability(*group),
            PhaseEvent::CapabilityEnded { .. } => TurnPhase::AwaitingFinalAnswer,
            PhaseEvent::ModelFailed { .. } => self,
            PhaseEvent::Completed { .. } => TurnPhase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_path() {
        let events = [
            PhaseEvent::DecisionStarted,
            PhaseEvent::CapabilityStarted {
                group: CapabilityGroup::Scheduling,
                capability: "manage_appointment".to_string(),
            },
            PhaseEvent::CapabilityEnded {
                group: CapabilityGroup::Scheduling,
            },
            PhaseEvent::Completed {
                text: "Terjadwal".to_string(),
                group: CapabilityGroup::Scheduling,
            },
        ];

        let mut phase = TurnPhase::Idle;
        let mut seen = Vec::new();
        for event in &events {
            phase = phase.after(event);
            seen.push(phase);
        }

        assert_eq!(
            seen,
            vec![
                TurnPhase::AwaitingModelDecision,
                TurnPhase::InvokingCapability(CapabilityGroup::Scheduling),
                TurnPhase::AwaitingFinalAnswer,
                TurnPhase::Idle,
            ]
        );
        assert!(events[3].is_terminal());
        assert_eq!(events[1].name(), "capability_started");
    }

    #[test]
    fn test_failure_keeps_phase() {
        let phase = TurnPhase::AwaitingFinalAnswer.after(&PhaseEvent::ModelFailed {
            error: "timeout".to_string(),
        });
        assert_eq!(phase, TurnPhase::AwaitingFinalAnswer);
    }
}
