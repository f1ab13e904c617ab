// src/main.rs

use anyhow::Result;
use clap::Parser;
use plugin_scaffold::cli::{Cli, Commands};
use plugin_scaffold::config::ConfigBuilder;
#[cfg(feature = "progress")]
use plugin_scaffold::progress::IndicatifProgress;
use plugin_scaffold::progress::ProgressReporter;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    let default_directive = if cfg!(debug_assertions) {
        "plugin_scaffold=debug"
    } else {
        "plugin_scaffold=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_directive.parse()?),
        )
        .init();

    log::info!("Starting plugin-scaffold v{}...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    // --- Error Handling ---
    // Configuration and runtime failures share one presentation and exit code.
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Builds the configuration for the chosen subcommand and executes it.
fn run(cli: Cli) -> plugin_scaffold::Result<()> {
    match cli.command {
        Commands::Create(args) => {
            let config = ConfigBuilder::from_create_args(&args).build()?;
            log::debug!("Configuration built successfully for {:?}", config.reference);

            let summary = plugin_scaffold::create(&config, progress_reporter())?;
            println!(
                "Created project in '{}' ({} files, {} directories).",
                config.output_dir.display(),
                summary.files,
                summary.directories
            );
        }
        Commands::Tags(args) => {
            let config = ConfigBuilder::from_remote_args(&args).build()?;
            for tag in plugin_scaffold::tags(&config)? {
                println!("{}", tag);
            }
        }
    }
    Ok(())
}

/// Shows a spinner when stderr is a TTY.
fn progress_reporter() -> Option<Arc<dyn ProgressReporter>> {
    #[cfg(feature = "progress")]
    {
        if atty::is(atty::Stream::Stderr) {
            return Some(Arc::new(IndicatifProgress::new()));
        }
    }
    None
}
