//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for hospital-ops
#[derive(Parser, Debug)]
#[command(name = "hospital-ops")]
#[command(
    author,
    version,
    about = "Hospital operations assistant - one orchestrator, four back-office capabilities"
)]
#[command(long_about = r#"
hospital-ops routes front-desk requests to the right hospital back office.

An orchestrator model reads each message and either answers directly or
delegates to one capability:
  - Patient administration (admission, discharge, status)
  - Scheduling (booking, rescheduling, cancellation, availability)
  - Medical records (history, test results, diagnosis)
  - Billing and insurance (invoices, insurance checks, payments)

Configuration is loaded from (in priority order):
1. HOSPITAL_OPS_<SECTION>__<KEY>            Environment variables
2. --config <path>                          Explicit config file
3. ./hospital-ops.toml                      Project-level config
4. ~/.config/hospital-ops/config.toml       Global config

The API key is read from the variable named by [model] api_key_env (API_KEY).

Example:
  hospital-ops "Tolong daftarkan pasien baru bernama Budi Santoso"
  hospital-ops --json "Cek tagihan pasien Budi Santoso"
  hospital-ops                               # interactive chat
"#)]
pub struct Cli {
    /// Message to send; starts the interactive chat when omitted
    pub message: Option<String>,

    /// Model to use as the orchestrator
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Print the single-shot reply as JSON
    #[arg(long)]
    pub json: bool,

    /// Simulated back-end latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the thinking spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_single_shot() {
        let cli = Cli::parse_from([
            "hospital-ops",
            "--json",
            "-vv",
            "--latency-ms",
            "0",
            "Cek tagihan Budi",
        ]);
        assert_eq!(cli.message.as_deref(), Some("Cek tagihan Budi"));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.latency_ms, Some(0));
    }

    #[test]
    fn test_parse_interactive() {
        let cli = Cli::parse_from(["hospital-ops", "-m", "gemini-2.5-pro", "--no-config"]);
        assert!(cli.message.is_none());
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-pro"));
        assert!(cli.no_config);
    }
}
