//! CLI entrypoint for the MAGI council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use magi_application::RunConsensusUseCase;
use magi_domain::Severity;
use magi_infrastructure::{ConfigLoader, FileConfig, GeminiClient};
use magi_presentation::{
    ChatRepl, Cli, HtmlFormatter, OutputConfig, OutputFormatter, ReplConfig, ReportContext,
    formatter_for, progress_for_stderr,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Install the stderr subscriber, plus a file layer when `log_file` is set
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = level_for(verbose);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Print configuration issues; fail if any is an error
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("{} {}", "config error:".red().bold(), issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting MAGI council");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    let output_config = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress,
        history_file: config.repl.history_file.clone(),
    };

    if !output_config.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let mut settings = config.gemini.to_settings();
    if let Some(model) = cli.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        settings.model = Some(model.to_string());
    }
    let client = Arc::new(GeminiClient::connect(&settings).await?);

    let (params, _) = config.evaluation.to_params();
    let mut council = RunConsensusUseCase::new(client).with_params(params);

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(council)
            .with_progress(repl_config.show_progress && !cli.quiet)
            .with_history(repl_config.history_path());

        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single proposal mode - proposal is required
    let Some(proposal) = cli.proposal else {
        bail!("Proposal is required. Use --chat for interactive mode.");
    };

    let formatter = formatter_for(output_config.format);

    let result = if cli.quiet {
        council.execute(&proposal).await
    } else {
        let progress = progress_for_stderr();
        council.execute_with_progress(&proposal, progress.as_ref()).await
    };

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            println!("{}", formatter.format_error(&e.to_string()));
            return Ok(ExitCode::FAILURE);
        }
    };

    let context = ReportContext {
        model: council.model_name(),
        cache_entries: council.live_cache_entries(),
    };
    println!("{}", formatter.format(&result, &context));

    if let Some(path) = &cli.html_out {
        let html = HtmlFormatter::new().format(&result, &context);
        std::fs::write(path, html)
            .with_context(|| format!("Failed to write HTML report to {}", path.display()))?;
        info!("HTML report written to {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
