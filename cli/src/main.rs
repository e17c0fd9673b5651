//! CLI entrypoint for prompt-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use council_application::{
    ArtifactStore, RunCouncilInput, RunCouncilUseCase, RunLog, SuggestCouncilUseCase,
};
use council_domain::{Objective, SavedArtifact, TaskType};
use council_infrastructure::{ConfigLoader, GeminiGateway, JsonlArtifactStore, JsonlRunLog};
use council_presentation::{
    Cli, ConsoleFormatter, OutputFormat, ProgressReporter, load_council_file,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
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

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
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

    // === Dependency Injection ===
    let data_dir = config.resolve_data_dir();
    let run_log = Arc::new(JsonlRunLog::new(data_dir.join("history.jsonl"))?);
    let artifact_store = JsonlArtifactStore::new(data_dir.join("artifacts.jsonl"))?;

    // Store-only commands need no gateway
    if cli.history {
        println!("{}", ConsoleFormatter::format_history(&run_log.list()?));
        return Ok(());
    }
    if cli.clear_history {
        run_log.clear()?;
        println!("Run history cleared.");
        return Ok(());
    }
    if cli.artifacts {
        println!(
            "{}",
            ConsoleFormatter::format_artifacts(&artifact_store.list()?)
        );
        return Ok(());
    }

    let objective = match &cli.objective {
        Some(text) => Objective::try_new(text.clone()).context("Objective cannot be empty")?,
        None => bail!("An objective is required. See --help for usage."),
    };

    let api_key = std::env::var(&config.gateway.api_key_env).with_context(|| {
        format!(
            "Missing API key: set the {} environment variable",
            config.gateway.api_key_env
        )
    })?;
    let gateway = Arc::new(GeminiGateway::new(api_key).with_base_url(config.gateway.base_url.clone()));
    let params = config.council_params();

    info!("Starting prompt-council");

    // Assemble the roster: council file, suggestion, or both
    let mut perspectives = Vec::new();
    let mut task_type = cli.task_type.map(TaskType::from);

    if let Some(path) = &cli.council {
        perspectives = load_council_file(path)?;
    }

    if cli.suggest {
        let use_case =
            SuggestCouncilUseCase::new(Arc::clone(&gateway)).with_params(params.clone());
        let suggested = use_case.execute(&objective).await?;

        if !cli.quiet {
            println!("Suggested council ({}):", suggested.task_type.display_name());
            for profile in &suggested.profiles {
                println!("  * {} - {}", profile.role, profile.directive);
            }
            println!();
        }

        if task_type.is_none() {
            task_type = Some(suggested.task_type);
        }
        perspectives.extend(suggested.profiles);
    }

    if perspectives.is_empty() {
        bail!("No council lenses defined. Provide --council <file> or --suggest.");
    }

    let input = RunCouncilInput::new(objective, perspectives)
        .with_context(cli.context.clone().unwrap_or_default())
        .with_task_type(task_type.unwrap_or(TaskType::Analytical));

    // Ctrl-C abandons the run explicitly instead of killing it mid-call
    let cancellation = CancellationToken::new();
    {
        let cancellation = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancellation.cancel();
            }
        });
    }

    let use_case = RunCouncilUseCase::new(gateway, run_log.clone())
        .with_params(params)
        .with_cancellation(cancellation);

    let result = if cli.quiet {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_observer(input, &progress).await
    };

    let result = match result {
        Ok(result) => result,
        Err(e) if e.is_cancelled() => {
            println!("Run cancelled.");
            return Ok(());
        }
        Err(e) => bail!("{e}"),
    };

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Final => ConsoleFormatter::format_final_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{}", output);

    if let Some(label) = &cli.save_artifact {
        let now = chrono::Utc::now().timestamp_millis();
        artifact_store.append(&SavedArtifact::new(
            format!("artifact-{now}"),
            label.clone(),
            result.improved_prompt.clone(),
            now,
        ))?;
        if !cli.quiet {
            println!("Saved artifact '{}'.", label);
        }
    }

    Ok(())
}
