//! Displayable chat messages

use crate::capability::CapabilityGroup;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

/// A message shown in the chat transcript (Entity)
///
/// Immutable once created. Agent messages carry the group that answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<CapabilityGroup>,
}

impl Message {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::User,
            text: text.into(),
            timestamp: Utc::now(),
            group: None,
        }
    }

    pub fn agent(id: u64, text: impl Into<String>, group: CapabilityGroup) -> Self {
        Self {
            id,
            sender: Sender::Agent,
            text: text.into(),
            timestamp: Utc::now(),
            group: Some(group),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
