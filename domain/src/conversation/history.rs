//! Conversation history entities

use super::response::ContentBlock;
use crate::capability::{CapabilityCall, CapabilityResult};
use serde::{Deserialize, Serialize};

/// One entry of the conversation sent to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Turn {
    /// A user utterance
    User { text: String },
    /// Model content: text and/or a capability call
    Model { content: Vec<ContentBlock> },
    /// The result of the capability requested by the preceding model turn
    CapabilityResult {
        call: CapabilityCall,
        result: CapabilityResult,
    },
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Turn::User { text: text.into() }
    }

    pub fn model(content: Vec<ContentBlock>) -> Self {
        Turn::Model { content }
    }

    pub fn capability_result(call: CapabilityCall, result: CapabilityResult) -> Self {
        Turn::CapabilityResult { call, result }
    }

    /// The capability call carried by a model turn, if any
    pub fn call(&self) -> Option<&CapabilityCall> {
        match self {
            Turn::Model { content } => content.iter().find_map(|b| b.as_call()),
            _ => None,
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            Turn::User { .. } => "user",
            Turn::Model { .. } => "model",
            Turn::CapabilityResult { .. } => "capability_result",
        }
    }
}

/// Ordered, append-only conversation history (Entity)
///
/// Entries are only ever appended, except for [`truncate`](Self::truncate)
/// (used to discard a failed turn) and [`clear`](Self::clear) on reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Drop every entry after the first `len`
    pub fn truncate(&mut self, len: usize) {
        self.turns.truncate(len);
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Whether some model call is not immediately followed by its result
    pub fn has_unresolved_call(&self) -> bool {
        self.turns.iter().enumerate().any(|(i, turn)| {
            turn.call().is_some()
                && !matches!(self.turns.get(i + 1), Some(Turn::CapabilityResult { .. }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilityGroup;

    fn call() -> CapabilityCall {
        CapabilityCall::new("manage_patient").with_arg("patientName", "Budi Santoso")
    }

    #[test]
    fn test_unresolved_call_detection() {
        let mut history = ConversationHistory::new();
        history.push(Turn::user("Daftarkan Budi"));
        history.push(Turn::model(vec![ContentBlock::Call(call())]));
        assert!(history.has_unresolved_call());

        history.push(Turn::capability_result(
            call(),
            CapabilityResult::new(CapabilityGroup::PatientAdmin, serde_json::json!({})),
        ));
        assert!(!history.has_unresolved_call());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_truncate_and_clear() {
        let mut history = ConversationHistory::new();
        history.push(Turn::user("a"));
        history.push(Turn::model(vec![ContentBlock::Text("b".to_string())]));
        history.truncate(1);
        assert_eq!(history.turns(), &[Turn::user("a")]);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_turn_roles() {
        assert_eq!(Turn::user("x").role(), "user");
        assert_eq!(Turn::model(vec![]).role(), "model");
        assert!(Turn::model(vec![]).call().is_none());
    }
}
