//! Conversation session state.
//!
//! A [`ConversationSession`] is everything one conversation owns: the
//! history sent to the model, the transient [`ProcessingState`] the UI
//! mirrors, and the transcript of display messages. The caller creates it
//! and passes it to the engine for each turn; independent sessions can run
//! side by side.

use hospital_domain::{
    CapabilityGroup, ConversationHistory, DomainError, Message, PhaseEvent, ProcessingState,
    PromptTemplate, TurnPhase,
};
use std::ops::{Deref, DerefMut};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct ConversationSession {
    history: ConversationHistory,
    processing: ProcessingState,
    phase: TurnPhase,
    transcript: Vec<Message>,
    next_message_id: u64,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    /// Fresh session: empty history, idle, transcript holding the welcome message.
    pub fn new() -> Self {
        let mut session = Self {
            history: ConversationHistory::new(),
            processing: ProcessingState::idle(),
            phase: TurnPhase::Idle,
            transcript: Vec::new(),
            next_message_id: 1,
        };
        session.push_agent_message(PromptTemplate::welcome(), CapabilityGroup::Orchestrator);
        session
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn processing(&self) -> &ProcessingState {
        &self.processing
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// True while a turn is in flight
    pub fn is_busy(&self) -> bool {
        self.processing.is_thinking
    }

    /// Clear the history and start the transcript over with the reset notice.
    pub fn reset(&mut self) {
        self.history.clear();
        self.processing = ProcessingState::idle();
        self.phase = TurnPhase::Idle;
        self.transcript.clear();
        self.push_agent_message(PromptTemplate::reset_notice(), CapabilityGroup::Orchestrator);
    }

    // ==================== Engine-facing mutators ====================

    /// Guard a new submission and record it in the transcript.
    ///
    /// The busy check cannot trip through the engine: a turn borrows the
    /// session exclusively and [`TurnGuard`] restores idle if the turn is
    /// dropped. It keeps a session whose processing state says otherwise
    /// from starting a second turn.
    pub(crate) fn begin_turn(&mut self, text: &str) -> Result<(), DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        if self.is_busy() {
            return Err(DomainError::TurnInProgress);
        }
        let id = self.allocate_id();
        self.transcript.push(Message::user(id, text));
        Ok(())
    }

    pub(crate) fn history_mut(&mut self) -> &mut ConversationHistory {
        &mut self.history
    }

    pub(crate) fn apply_event(&mut self, event: &PhaseEvent) {
        self.processing.apply(event);
        self.phase = self.phase.after(event);
    }

    pub(crate) fn push_agent_message(&mut self, text: &str, group: CapabilityGroup) {
        let id = self.allocate_id();
        self.transcript.push(Message::agent(id, text, group));
    }

    /// Undo an unfinished turn: history back to `checkpoint`, processing idle.
    pub(crate) fn abandon_turn(&mut self, checkpoint: usize) {
        self.history.truncate(checkpoint);
        self.processing = ProcessingState::idle();
        self.phase = TurnPhase::Idle;
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}

/// Session borrow for the duration of one turn.
///
/// Dropping the guard without [`TurnGuard::complete`] abandons the turn, so
/// a turn future cancelled by `timeout` or `select!` leaves the session
/// idle with its pre-turn history.
pub(crate) struct TurnGuard<'s> {
    session: &'s mut ConversationSession,
    checkpoint: usize,
    completed: bool,
}

impl<'s> TurnGuard<'s> {
    pub(crate) fn new(session: &'s mut ConversationSession) -> Self {
        let checkpoint = session.history.len();
        Self {
            session,
            checkpoint,
            completed: false,
        }
    }

    /// History length before the turn
    pub(crate) fn checkpoint(&self) -> usize {
        self.checkpoint
    }

    pub(crate) fn complete(mut self) {
        self.completed = true;
    }
}

impl Deref for TurnGuard<'_> {
    type Target = ConversationSession;

    fn deref(&self) -> &Self::Target {
        self.session
    }
}

impl DerefMut for TurnGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.session
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            warn!(
                "Turn dropped before completion; rolling history back to {} entries",
                self.checkpoint
            );
            self.session.abandon_turn(self.checkpoint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_domain::{Sender, Turn};

    #[test]
    fn test_new_session() {
        let session = ConversationSession::new();
        assert!(session.history().is_empty());
        assert!(!session.is_busy());
        assert_eq!(session.phase(), TurnPhase::Idle);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].sender, Sender::Agent);
        assert_eq!(session.transcript()[0].text, PromptTemplate::welcome());
    }

    #[test]
    fn test_begin_turn_guards() {
        let mut session = ConversationSession::new();
        assert_eq!(session.begin_turn("   "), Err(DomainError::EmptyMessage));

        session.apply_event(&PhaseEvent::DecisionStarted);
        assert_eq!(session.begin_turn("Halo"), Err(DomainError::TurnInProgress));

        // Rejected submissions leave the transcript alone
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_message_ids_increase() {
        let mut session = ConversationSession::new();
        session.begin_turn("Halo").unwrap();
        session.push_agent_message("Ada yang bisa dibantu?", CapabilityGroup::Orchestrator);

        let ids: Vec<u64> = session.transcript().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_dropped_guard_abandons_turn() {
        let mut session = ConversationSession::new();
        session.history_mut().push(Turn::user("Halo"));

        {
            let mut guard = TurnGuard::new(&mut session);
            assert_eq!(guard.checkpoint(), 1);
            guard.history_mut().push(Turn::user("Cek tagihan Budi"));
            guard.apply_event(&PhaseEvent::DecisionStarted);
        }

        assert_eq!(session.history().len(), 1);
        assert!(!session.is_busy());
        assert_eq!(session.phase(), TurnPhase::Idle);
        assert!(session.begin_turn("Cek tagihan Budi").is_ok());
    }

    #[test]
    fn test_completed_guard_keeps_turn() {
        let mut session = ConversationSession::new();

        let mut guard = TurnGuard::new(&mut session);
        guard.history_mut().push(Turn::user("Halo"));
        guard.complete();

        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut session = ConversationSession::new();
        session.begin_turn("Halo").unwrap();
        session.history_mut().push(Turn::user("Halo"));
        session.apply_event(&PhaseEvent::DecisionStarted);

        session.reset();

        assert!(session.history().is_empty());
        assert!(!session.is_busy());
        assert_eq!(session.phase(), TurnPhase::Idle);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].text, PromptTemplate::reset_notice());
    }
}
