//! CLI entrypoint for wayfarer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wayfarer_application::{
    ContentGateway, ConversationLogger, GenerationParams, NoConversationLogger,
    RunGenerationError, RunGenerationInput, RunGenerationUseCase,
};
use wayfarer_domain::{ContentCategory, Conversation, Model, Temperature};
use wayfarer_infrastructure::{ConfigLoader, DeepSeekGateway, JsonlConversationLogger};
use wayfarer_presentation::{ChatRepl, Cli, ConsoleFormatter, GenerationSpinner};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // Command-line values win over the config file
    let category: ContentCategory = match &cli.category {
        Some(value) => value.parse()?,
        None => config.generation.parse_category()?,
    };
    let temperature = match cli.temperature {
        Some(value) => Temperature::new(value)?,
        None => config.generation.parse_temperature()?,
    };
    let model: Model = match &cli.model {
        Some(value) => value.parse().unwrap(),
        None => config.provider.parse_model(),
    };

    // The credential is resolved here, before the core is ever touched
    let Some(api_key) = config.provider.resolve_api_key() else {
        bail!(
            "Missing API key: set {} or provider.api_key in wayfarer.toml",
            config.provider.api_key_env
        );
    };

    info!("Starting wayfarer (model: {})", model);

    // === Dependency Injection ===
    let gateway: Arc<dyn ContentGateway> =
        Arc::new(DeepSeekGateway::new(api_key, model, &config.provider.base_url));

    let conversation_logger: Arc<dyn ConversationLogger> = config
        .logging
        .conversation_log
        .as_ref()
        .and_then(JsonlConversationLogger::new)
        .map(|logger| {
            info!("Conversation transcript: {}", logger.path().display());
            Arc::new(logger) as Arc<dyn ConversationLogger>
        })
        .unwrap_or_else(|| Arc::new(NoConversationLogger));

    let params = GenerationParams::default()
        .with_category(category)
        .with_temperature(temperature);

    // Chat mode
    if cli.chat {
        let history_file = config
            .repl
            .history_file
            .clone()
            .map(PathBuf::from)
            .or_else(|| dirs::data_dir().map(|p| p.join("wayfarer").join("history.txt")));

        let mut repl = ChatRepl::new(gateway, params)
            .with_conversation_logger(conversation_logger)
            .with_progress(!cli.quiet && config.repl.show_progress)
            .with_history_file(history_file);

        repl.run().await?;
        return Ok(());
    }

    // One-shot mode - a request is required
    let request = match cli.request {
        Some(r) if !r.trim().is_empty() => r,
        _ => bail!("A request is required. Use --chat for interactive mode."),
    };

    if !cli.quiet {
        println!();
        println!("Category: {}", params.category);
        println!("Request: {}", request);
        println!();
    }

    let use_case =
        RunGenerationUseCase::new(gateway).with_conversation_logger(conversation_logger);
    let mut conversation = Conversation::new(params.category);

    let spinner = (!cli.quiet).then(GenerationSpinner::start);
    let result = use_case
        .execute(
            &mut conversation,
            RunGenerationInput::new(&request, params.temperature),
        )
        .await;
    if let Some(spinner) = spinner {
        spinner.finish();
    }

    // Failures surface as ordinary reply text, matching the chat surface
    let reply = match result {
        Ok(text) => text,
        Err(RunGenerationError::GatewayError(e)) => {
            let formatted = ConsoleFormatter::format_generation_failure(&e);
            conversation.push_round(&request, &formatted);
            formatted
        }
    };

    println!("{}", ConsoleFormatter::format_reply(&reply));

    Ok(())
}
