//! Slash commands understood by the chat REPL

use hospital_domain::QUICK_ACTIONS;

/// A parsed slash command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Reset,
    /// Send quick action `n` (zero-based)
    Quick(usize),
    /// List the quick actions
    QuickList,
    Status,
    Quit,
    Unknown,
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for plain text.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        let command = match name {
            "help" | "h" | "?" => ReplCommand::Help,
            "reset" | "clear" => ReplCommand::Reset,
            "status" => ReplCommand::Status,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            "quick" => match arg.map(str::parse::<usize>) {
                None => ReplCommand::QuickList,
                Some(Ok(n)) if (1..=QUICK_ACTIONS.len()).contains(&n) => ReplCommand::Quick(n - 1),
                Some(_) => ReplCommand::Unknown,
            },
            _ => ReplCommand::Unknown,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(ReplCommand::parse("Halo, saya mau daftar"), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/help"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("  /reset "), Some(ReplCommand::Reset));
        assert_eq!(ReplCommand::parse("/status"), Some(ReplCommand::Status));
        assert_eq!(ReplCommand::parse("/q"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/bogus"), Some(ReplCommand::Unknown));
    }

    #[test]
    fn test_parse_quick() {
        assert_eq!(ReplCommand::parse("/quick"), Some(ReplCommand::QuickList));
        assert_eq!(ReplCommand::parse("/quick 1"), Some(ReplCommand::Quick(0)));
        assert_eq!(ReplCommand::parse("/quick 4"), Some(ReplCommand::Quick(3)));
        assert_eq!(ReplCommand::parse("/quick 5"), Some(ReplCommand::Unknown));
        assert_eq!(ReplCommand::parse("/quick x"), Some(ReplCommand::Unknown));
    }
}
