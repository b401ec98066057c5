// src/main.rs

use anyhow::Result;
use clap::Parser;
use pattern_break::cli::Cli;
use pattern_break::config::ConfigBuilder;
use pattern_break::constants::STATUS_PREFIX;
use pattern_break::errors::Error;
use pattern_break::output::ClipboardOutcome;
#[cfg(feature = "progress")]
use pattern_break::progress::IndicatifProgress;
use pattern_break::progress::ProgressReporter;
use pattern_break::run;
use pattern_break::signal::setup_signal_handler;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "pattern_break=debug".parse()?
                } else {
                    "pattern_break=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting pattern-break v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = Cli::parse();

    if let Some(topic) = cli.topic {
        println!("{}", topic.text());
        return Ok(());
    }

    // Show a spinner only if stderr is a TTY.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    let report = match run(&config, &token, progress_reporter) {
        Ok(report) => report,
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &report.file_written {
        eprintln!("{} Wrote output to file: {}", STATUS_PREFIX, path.display());
    }
    match &report.clipboard {
        ClipboardOutcome::NotRequested => {}
        ClipboardOutcome::Copied => eprintln!("{} Copied output to clipboard.", STATUS_PREFIX),
        ClipboardOutcome::Unavailable => eprintln!(
            "{} Clipboard support not available; cannot copy to clipboard.",
            STATUS_PREFIX
        ),
        ClipboardOutcome::Failed(reason) => {
            eprintln!("{} {}; cannot copy to clipboard.", STATUS_PREFIX, reason)
        }
    }

    Ok(())
}
