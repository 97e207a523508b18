//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::ReplConfig;
use crate::chat::command::ReplCommand;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use hospital_application::{
    ConversationSession, OrchestrationEngine, PhaseObserver, TurnOutcome,
};
use hospital_domain::QUICK_ACTIONS;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive chat REPL
///
/// Owns the conversation session; the engine is shared.
pub struct ChatRepl {
    engine: Arc<OrchestrationEngine>,
    session: ConversationSession,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(engine: Arc<OrchestrationEngine>) -> Self {
        Self {
            engine,
            session: ConversationSession::new(),
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.send(line, false).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Sampai jumpa!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Run one turn and print the new transcript messages.
    ///
    /// Rejected submissions (blank, or a turn already running) are ignored.
    pub async fn send(&mut self, text: &str, echo: bool) -> Option<TurnOutcome> {
        let before = self.session.transcript().len();

        let spinner;
        let observer: &dyn PhaseObserver = if self.config.show_progress {
            spinner = ProgressReporter::new();
            &spinner
        } else {
            &SimpleProgress
        };

        let outcome = self
            .engine
            .handle_user_message(&mut self.session, text, observer)
            .await
            .ok()?;

        for message in &self.session.transcript()[before..] {
            if echo || !message.is_user() {
                println!("{}\n", ConsoleFormatter::format_message(message));
            }
        }
        Some(outcome)
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::header("RS INDUK - Asisten Operasional"));
        println!();
        for message in self.session.transcript() {
            println!("{}\n", ConsoleFormatter::format_message(message));
        }
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!(
            "  /quick [1-{}]      - Send a quick action (list them without a number)",
            QUICK_ACTIONS.len()
        );
        println!("  /reset            - Start the conversation over");
        println!("  /status           - Show processing state and history size");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Sampai jumpa!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::QuickList => {
                println!("Aksi Cepat:");
                println!("{}\n", ConsoleFormatter::format_quick_actions());
            }
            ReplCommand::Quick(index) => {
                if let Some(action) = QUICK_ACTIONS.get(index) {
                    self.send(action.prompt, true).await;
                }
            }
            ReplCommand::Reset => {
                self.engine.reset(&mut self.session);
                if let Some(notice) = self.session.transcript().first() {
                    println!("{}\n", ConsoleFormatter::format_message(notice));
                }
            }
            ReplCommand::Status => {
                println!(
                    "{}\n",
                    ConsoleFormatter::format_status(
                        self.session.processing(),
                        self.session.history().len()
                    )
                );
            }
            ReplCommand::Unknown => {
                println!("Unknown command. Type /help for available commands");
            }
        }
        false
    }
}
