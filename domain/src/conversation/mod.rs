//! Conversation domain.
//!
//! - [`history::Turn`] / [`history::ConversationHistory`]: what the model sees
//! - [`response::ModelResponse`]: what the model returns
//! - [`message::Message`]: what the user sees

pub mod history;
pub mod message;
pub mod response;
