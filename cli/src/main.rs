//! CLI entrypoint for MCQ Generator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use mcq_application::{
    BehaviorConfig, GenerateMcqInput, GenerateMcqUseCase, GenerationLogger, LlmGateway,
    ModelHandle, NoGenerationLogger,
};
use mcq_domain::{DomainError, GenerationParams, Model, OutputFormat};
use mcq_infrastructure::{
    ConfigLoader, FileConfig, JsonlGenerationLogger, LocalServerAdapter, OpenAiAdapter,
    ProviderAdapter, RoutingGateway,
};
use mcq_presentation::{Cli, ConsoleFormatter, McqRepl, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

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

    // stderr keeps stdout clean for --output json
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting MCQ Generator");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;

    if !config.output.color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let provider_config = config.providers.to_provider_config();
    let providers: Vec<Arc<dyn ProviderAdapter>> = vec![
        Arc::new(LocalServerAdapter::new(provider_config.local.clone())?),
        Arc::new(OpenAiAdapter::new(provider_config.openai.clone())?),
    ];
    let gateway = Arc::new(RoutingGateway::new(providers, &provider_config));

    if cli.list_models {
        for model in gateway.available_models().await? {
            println!("{:<45} {}", model.as_str(), model.family());
        }
        return Ok(());
    }

    let model = select_model(&cli, &config)?;
    let params = generation_params(&cli, &config)?;
    let backend = gateway
        .provider_for(&model)
        .map(|kind| kind.display_name())
        .unwrap_or("no backend");
    info!(model = %model, backend = backend, "Model selected");

    let handle = Arc::new(ModelHandle::new(Arc::clone(&gateway), model));
    let use_case = GenerateMcqUseCase::new(handle)
        .with_behavior(BehaviorConfig::from_timeout_seconds(
            config.behavior.timeout_seconds,
        ))
        .with_logger(generation_logger(&cli, &config));

    // Interactive mode
    if cli.interactive {
        let repl = McqRepl::new(use_case, backend)
            .with_params(params)
            .with_progress(!cli.quiet && config.repl.show_progress)
            .with_history(config.repl.history_path());

        repl.run().await?;
        return Ok(());
    }

    // Single-shot mode - concept is required
    let Some(concept) = cli.concept else {
        bail!("A concept is required. Use --interactive for interactive mode.");
    };

    let input = GenerateMcqInput::new(concept).with_params(params);
    let output = if cli.quiet || !config.repl.show_progress {
        use_case.execute(input).await?
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await?
    };

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let text = match format {
        OutputFormat::Markdown if cli.quiet => ConsoleFormatter::format_quiet(&output, backend),
        OutputFormat::Markdown => ConsoleFormatter::format(&output, backend),
        OutputFormat::Json => ConsoleFormatter::format_json(&output),
        OutputFormat::Raw => ConsoleFormatter::format_raw(&output),
    };

    println!("{}", text);

    Ok(())
}

/// Load and validate configuration; errors abort, warnings are logged.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in config.check()? {
        warn!("{}", issue.message);
    }

    Ok(config)
}

fn select_model(cli: &Cli, config: &FileConfig) -> Result<Model> {
    match cli.model.as_deref() {
        Some(name) if name.trim().is_empty() => Err(DomainError::InvalidModel(
            "--model cannot be empty".to_string(),
        )
        .into()),
        Some(name) => {
            let Ok(model) = name.trim().parse::<Model>();
            Ok(model)
        }
        None => Ok(config.model.model()),
    }
}

/// Config-file parameters with CLI overrides applied
fn generation_params(cli: &Cli, config: &FileConfig) -> Result<GenerationParams> {
    let mut params = config.generation.to_params();
    if let Some(max_new_tokens) = cli.max_new_tokens {
        params = params.with_max_new_tokens(max_new_tokens);
    }
    if let Some(temperature) = cli.temperature {
        params = params.with_temperature(temperature);
    }
    if let Some(top_p) = cli.top_p {
        params = params.with_top_p(top_p);
    }
    params.validate()?;
    Ok(params)
}

fn generation_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn GenerationLogger> {
    let path = cli
        .generation_log
        .clone()
        .or_else(|| config.log.generation_log.as_ref().map(PathBuf::from));

    match path.and_then(|p| JsonlGenerationLogger::new(p)) {
        Some(logger) => {
            info!("Generation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoGenerationLogger),
    }
}
