//! Interactive chat module
//!
//! Provides a readline-based interactive chat with the orchestrator.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::ChatRepl;
