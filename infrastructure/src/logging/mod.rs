//! Logging infrastructure: conversation transcript logging.
//!
//! Provides [`JsonlConversationLogger`], an append-only JSONL writer that
//! implements the [`ConversationLogger`](hospital_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
