//! UI-observable processing state

use super::event::PhaseEvent;
use crate::capability::CapabilityGroup;
use serde::{Deserialize, Serialize};

/// Transient state mirroring the engine's current phase
///
/// Driven entirely by [`PhaseEvent`]s, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingState {
    pub is_thinking: bool,
    pub active_group: Option<CapabilityGroup>,
}

impl ProcessingState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &PhaseEvent) {
        match event {
            PhaseEvent::DecisionStarted => {
                self.is_thinking = true;
                self.active_group = Some(CapabilityGroup::Orchestrator);
            }
            PhaseEvent::CapabilityStarted { group, .. } => {
                self.is_thinking = true;
                self.active_group = Some(*group);
            }
            PhaseEvent::CapabilityEnded { .. } => {
                self.active_group = Some(CapabilityGroup::Orchestrator);
            }
            PhaseEvent::ModelFailed { .. } => {}
            PhaseEvent::Completed { .. } => *self = Self::idle(),
        }
    }

    /// Group to highlight, orchestrator when nothing is active
    pub fn display_group(&self) -> CapabilityGroup {
        self.active_group.unwrap_or_default()
    }
}
