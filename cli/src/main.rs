//! CLI entrypoint for hospital-ops
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use hospital_application::{
    ConversationLogger, ConversationSession, NoConversationLogger, NoPhaseObserver,
    OrchestrationEngine, OrchestrationParams, PhaseObserver,
};
use hospital_infrastructure::{
    CapabilityRegistry, ConfigLoader, FileConfig, GeminiError, GeminiGateway, GeminiSettings,
    JsonSchemaCapabilityConverter, JsonlConversationLogger, MockCapabilityExecutor, Severity,
};
use hospital_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig, SimpleProgress,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    let _log_guard = init_tracing(cli.verbose, config.log_file_path())?;
    info!("Starting hospital-ops");

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!("Config {}", issue),
            Severity::Warning => warn!("Config {}", issue),
        }
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let engine = Arc::new(build_engine(&config)?);

    let output = OutputConfig {
        color: config.output.color,
        json: cli.json,
    };
    let repl = ReplConfig {
        show_progress: config.repl.show_progress,
        history_file: config.history_file_path().map(PathBuf::from),
    };

    match cli.message {
        Some(message) => run_single(&engine, &message, &output, &repl).await,
        None => {
            let mut chat = ChatRepl::new(engine).with_config(repl);
            chat.run().await?;
            Ok(())
        }
    }
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }
    if let Some(latency) = cli.latency_ms {
        config.capabilities.latency_ms = latency;
    }
    if cli.quiet {
        config.repl.show_progress = false;
    }
    if cli.no_color {
        config.output.color = false;
    }
}

/// Install the tracing subscriber. The guard must live until exit.
fn init_tracing(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

// === Dependency Injection ===
fn build_engine(config: &FileConfig) -> Result<OrchestrationEngine> {
    let (model, _) = config.model.parse_model();

    let api_key = config
        .model
        .resolve_api_key()
        .ok_or_else(|| GeminiError::MissingApiKey(config.model.api_key_env.clone()))?;
    let settings = GeminiSettings::new(api_key)
        .with_base_url(config.model.base_url.clone())
        .with_timeout(config.model.timeout());
    let gateway = Arc::new(GeminiGateway::new(settings)?);

    let registry = CapabilityRegistry::hospital()?;
    let executor = Arc::new(
        MockCapabilityExecutor::new(registry)
            .with_latency(config.capabilities.latency()),
    );

    let params = OrchestrationParams::default()
        .with_model(model)
        .with_validate_arguments(config.capabilities.validate_arguments);

    let logger: Arc<dyn ConversationLogger> = match config
        .conversation_log_path()
        .and_then(|path| JsonlConversationLogger::open(path))
    {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    info!(
        "Orchestrator {} with {} capabilities",
        params.model,
        executor.registry().len()
    );

    Ok(OrchestrationEngine::new(
        gateway,
        executor,
        Arc::new(JsonSchemaCapabilityConverter),
        params,
    )
    .with_conversation_logger(logger))
}

async fn run_single(
    engine: &OrchestrationEngine,
    message: &str,
    output: &OutputConfig,
    repl: &ReplConfig,
) -> Result<()> {
    let mut session = ConversationSession::new();

    let spinner;
    let observer: &dyn PhaseObserver = if output.json {
        &NoPhaseObserver
    } else if repl.show_progress {
        spinner = ProgressReporter::new();
        &spinner
    } else {
        &SimpleProgress
    };

    let outcome = match engine.handle_user_message(&mut session, message, observer).await {
        Ok(outcome) => outcome,
        Err(rejected) => bail!("{}", rejected),
    };

    if output.json {
        println!("{}", ConsoleFormatter::format_json(&outcome));
    } else if let Some(reply) = session.transcript().last() {
        println!("{}", ConsoleFormatter::format_message(reply));
    }

    if outcome.failed {
        bail!("The model request failed; see the log for details");
    }
    Ok(())
}
