//! Orchestrate use case.
//!
//! Runs one turn of the hospital-operations conversation: the orchestrator
//! model either answers a user message directly or delegates to exactly one
//! capability, whose result is then fed back for the final answer.
//!
//! ```text
//! user text
//!   │
//!   ▼
//! [decision round trip]  history + catalog ──▶ model
//!   │
//!   ├─ text only ─────────────────────────────────────────────▶ answer (Orchestrator)
//!   │
//!   └─ call ─▶ CapabilityStarted ─▶ executor ─▶ CapabilityEnded
//!                                                   │
//!                                                   ▼
//!              [final-answer round trip]  history + result ──▶ model ─▶ answer (group)
//! ```
//!
//! A failed round trip discards the whole turn from the history and answers
//! with a fixed apology; model failures never reach the caller as errors.

use crate::config::OrchestrationParams;
use crate::ports::capability_executor::CapabilityExecutorPort;
use crate::ports::capability_schema::CapabilitySchemaPort;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::model_gateway::{GatewayError, ModelGateway, ModelRequest};
use crate::ports::phase_observer::PhaseObserver;
use crate::use_cases::conversation_session::{ConversationSession, TurnGuard};
use hospital_domain::util::truncate_str;
use hospital_domain::{
    ArgumentIssue, CapabilityCall, CapabilityGroup, CapabilityValidator, ContentBlock,
    DefaultCapabilityValidator, DomainError, ModelResponse, PhaseEvent, PromptTemplate, Turn,
    fill_missing_required,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// A submission the engine refused to start a turn for.
///
/// Only guard violations end up here (blank text, a turn already in
/// flight); the presentation layer is expected to ignore them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Turn rejected: {0}")]
pub struct TurnRejected(#[from] pub DomainError);

impl TurnRejected {
    pub fn reason(&self) -> &DomainError {
        &self.0
    }
}

/// Result of a completed turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// Final answer shown to the user.
    pub text: String,
    /// Group that answered.
    pub group: CapabilityGroup,
    /// Capability the model invoked, if any.
    pub capability: Option<String>,
    /// Extra calls in the decision response that were dropped.
    pub discarded_calls: usize,
    /// Whether the answer is the failure fallback.
    pub failed: bool,
    /// Phase events of the turn, in emission order.
    pub events: Vec<PhaseEvent>,
}

struct Reply {
    text: String,
    group: CapabilityGroup,
    capability: Option<String>,
    discarded_calls: usize,
}

impl Reply {
    fn fallback() -> Self {
        Self {
            text: PromptTemplate::system_failure().to_string(),
            group: CapabilityGroup::Orchestrator,
            capability: None,
            discarded_calls: 0,
        }
    }
}

/// Collects a turn's events while forwarding them to the session and observer.
struct EventSink<'a> {
    observer: &'a dyn PhaseObserver,
    events: Vec<PhaseEvent>,
}

impl<'a> EventSink<'a> {
    fn new(observer: &'a dyn PhaseObserver) -> Self {
        Self {
            observer,
            events: Vec::new(),
        }
    }

    fn emit(&mut self, session: &mut ConversationSession, event: PhaseEvent) {
        debug!("Phase event: {}", event.name());
        session.apply_event(&event);
        self.observer.on_event(&event);
        self.events.push(event);
    }
}

/// The orchestration engine.
///
/// Stateless apart from its collaborators: everything a conversation owns
/// lives in the [`ConversationSession`] passed to each call.
pub struct OrchestrationEngine {
    gateway: Arc<dyn ModelGateway>,
    executor: Arc<dyn CapabilityExecutorPort>,
    validator: Arc<dyn CapabilityValidator>,
    conversation_logger: Arc<dyn ConversationLogger>,
    params: OrchestrationParams,
    capability_schemas: Vec<serde_json::Value>,
}

impl OrchestrationEngine {
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        executor: Arc<dyn CapabilityExecutorPort>,
        schema: Arc<dyn CapabilitySchemaPort>,
        params: OrchestrationParams,
    ) -> Self {
        let capability_schemas = schema.catalog_schema(executor.catalog());
        Self {
            gateway,
            executor,
            validator: Arc::new(DefaultCapabilityValidator),
            conversation_logger: Arc::new(NoConversationLogger),
            params,
            capability_schemas,
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Replace the argument validator.
    pub fn with_validator(mut self, validator: Arc<dyn CapabilityValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn params(&self) -> &OrchestrationParams {
        &self.params
    }

    /// Capability declarations as sent to the model, in registry order.
    pub fn capability_schemas(&self) -> &[serde_json::Value] {
        &self.capability_schemas
    }

    /// Handle one user message and return the final answer.
    ///
    /// Events are delivered to `observer` as they happen and drive the
    /// session's processing state. Model failures are turned into the
    /// fallback answer; only guard violations return `Err`. Dropping the
    /// returned future mid-turn discards the turn and leaves the session idle.
    pub async fn handle_user_message(
        &self,
        session: &mut ConversationSession,
        text: &str,
        observer: &dyn PhaseObserver,
    ) -> Result<TurnOutcome, TurnRejected> {
        session.begin_turn(text)?;

        info!("Handling user message: {}", truncate_str(text, 100));
        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            json!({ "text": text }),
        ));

        let mut turn = TurnGuard::new(session);
        let checkpoint = turn.checkpoint();
        turn.history_mut().push(Turn::user(text));

        let mut sink = EventSink::new(observer);
        sink.emit(&mut turn, PhaseEvent::DecisionStarted);

        let (reply, failed) = match self.run_turn(&mut turn, &mut sink).await {
            Ok(reply) => (reply, false),
            Err(e) => {
                warn!("Model round trip failed: {}", e);
                turn.history_mut().truncate(checkpoint);
                self.conversation_logger.log(ConversationEvent::new(
                    "model_error",
                    json!({ "error": e.to_string() }),
                ));
                sink.emit(
                    &mut turn,
                    PhaseEvent::ModelFailed {
                        error: e.to_string(),
                    },
                );
                (Reply::fallback(), true)
            }
        };

        sink.emit(
            &mut turn,
            PhaseEvent::Completed {
                text: reply.text.clone(),
                group: reply.group,
            },
        );
        turn.push_agent_message(&reply.text, reply.group);

        info!(
            "Turn completed by {} ({} history entries)",
            reply.group.as_str(),
            turn.history().len()
        );
        turn.complete();

        Ok(TurnOutcome {
            text: reply.text,
            group: reply.group,
            capability: reply.capability,
            discarded_calls: reply.discarded_calls,
            failed,
            events: sink.events,
        })
    }

    /// Start the conversation over.
    pub fn reset(&self, session: &mut ConversationSession) {
        let discarded = session.history().len();
        session.reset();
        info!("Session reset ({} history entries discarded)", discarded);
        self.conversation_logger.log(ConversationEvent::new(
            "session_reset",
            json!({ "discarded_entries": discarded }),
        ));
    }

    async fn run_turn(
        &self,
        session: &mut ConversationSession,
        sink: &mut EventSink<'_>,
    ) -> Result<Reply, GatewayError> {
        let params = &self.params;

        debug!(
            "Decision request with {} history entries, {} capabilities",
            session.history().len(),
            self.capability_schemas.len()
        );
        let mut decision = self
            .gateway
            .generate(ModelRequest::decision(
                &params.model,
                &params.system_instruction,
                session.history().turns(),
                &self.capability_schemas,
            ))
            .await?;

        let discarded_calls = decision.keep_first_call();
        if discarded_calls > 0 {
            warn!(
                "Model requested {} extra capability call(s); only the first is executed",
                discarded_calls
            );
        }

        let Some(call) = decision.first_call().cloned() else {
            return Ok(self.answer_directly(session, decision));
        };

        let name = call.capability_name.clone();
        let group = self.executor.catalog().resolve_group(&name);
        self.conversation_logger.log(ConversationEvent::new(
            "model_decision",
            json!({
                "capability": name,
                "arguments": call.arguments_json(),
                "discarded_calls": discarded_calls,
            }),
        ));

        let (prepared, issues) = self.prepare_call(&call);

        sink.emit(
            session,
            PhaseEvent::CapabilityStarted {
                group,
                capability: name.clone(),
            },
        );
        info!("Invoking capability {} ({})", name, group.as_str());
        self.conversation_logger.log(ConversationEvent::new(
            "capability_call",
            json!({
                "capability": name,
                "group": group.as_str(),
                "arguments": prepared.arguments_json(),
                "issues": issues.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
            }),
        ));

        let result = self.executor.execute(&prepared).await;

        self.conversation_logger.log(ConversationEvent::new(
            "capability_result",
            json!({
                "capability": name,
                "group": result.group.as_str(),
                "payload": result.payload,
            }),
        ));
        if result.is_failure() {
            warn!(
                "Capability {} returned a failure: {}",
                name,
                result.message().unwrap_or("(no message)")
            );
        }
        sink.emit(session, PhaseEvent::CapabilityEnded { group });

        session.history_mut().push(Turn::model(decision.content));
        session
            .history_mut()
            .push(Turn::capability_result(call, result));

        debug!(
            "Final-answer request with {} history entries",
            session.history().len()
        );
        let final_response = self
            .gateway
            .generate(ModelRequest::final_answer(
                &params.model,
                &params.system_instruction,
                session.history().turns(),
            ))
            .await?;

        if final_response.has_calls() {
            warn!("Final answer contained a capability call; ignoring it");
        }
        let mut text = final_response.text_content();
        if text.trim().is_empty() {
            text = PromptTemplate::empty_final_answer().to_string();
        }
        session
            .history_mut()
            .push(Turn::model(vec![ContentBlock::Text(text.clone())]));

        self.conversation_logger.log(ConversationEvent::new(
            "final_answer",
            json!({ "text": text, "group": group.as_str() }),
        ));

        Ok(Reply {
            text,
            group,
            capability: Some(name),
            discarded_calls,
        })
    }

    fn answer_directly(&self, session: &mut ConversationSession, response: ModelResponse) -> Reply {
        let mut text = response.text_content();
        if text.trim().is_empty() {
            text = PromptTemplate::empty_direct_answer().to_string();
        }

        let content = if response.content.is_empty() {
            vec![ContentBlock::Text(text.clone())]
        } else {
            response.content
        };
        session.history_mut().push(Turn::model(content));

        self.conversation_logger.log(ConversationEvent::new(
            "model_decision",
            json!({ "capability": null }),
        ));
        self.conversation_logger.log(ConversationEvent::new(
            "final_answer",
            json!({ "text": text, "group": CapabilityGroup::Orchestrator.as_str() }),
        ));

        Reply {
            text,
            group: CapabilityGroup::Orchestrator,
            capability: None,
            discarded_calls: 0,
        }
    }

    /// Run advisory validation and fill missing required fields.
    fn prepare_call(&self, call: &CapabilityCall) -> (CapabilityCall, Vec<ArgumentIssue>) {
        let Some(declaration) = self.executor.catalog().get(&call.capability_name) else {
            warn!("Model requested unknown capability: {}", call.capability_name);
            return (call.clone(), Vec::new());
        };
        if !self.params.validate_arguments {
            return (call.clone(), Vec::new());
        }

        let issues = self.validator.validate(call, declaration);
        for issue in &issues {
            warn!("Capability {}: {}", call.capability_name, issue);
        }
        (fill_missing_required(call, declaration), issues)
    }
}
