//! Decibel Lab CLI
//!
//! Command-line interface for the decibel scale toolkit.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use decibel_lab::analytics::{LogSink, Tracker};
use decibel_lab::cli::{commands, Cli, Commands};
use decibel_lab::config::LabConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    debug!("Decibel Lab v{}", env!("CARGO_PKG_VERSION"));

    let config = LabConfig::load_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "loading config {}",
            cli.config
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    let tracker = if config.analytics {
        Tracker::new(Arc::new(LogSink)).with_page("cli")
    } else {
        Tracker::disabled()
    };

    match cli.command {
        Some(cmd) => {
            if let Err(err) = handle_command(cmd, &config, &tracker) {
                eprintln!("{}", commands::describe_error(&err));
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            println!("Decibel Lab v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands, config: &LabConfig, tracker: &Tracker) -> decibel_lab::Result<()> {
    match cmd {
        Commands::FromIntensity {
            intensity,
            reference,
        } => commands::from_intensity(config, &intensity, reference.as_deref()),
        Commands::ToIntensity {
            decibels,
            reference,
        } => commands::to_intensity(config, &decibels, reference.as_deref()),
        Commands::Compare { base, compare } => commands::compare(tracker, &base, &compare),
        Commands::Format { value } => commands::format(&value),
        Commands::Classify { decibels } => commands::classify(tracker, &decibels),
        Commands::Extreme { decibels } => commands::extreme(config, tracker, &decibels),
        Commands::Examples { extreme } => commands::list_examples(extreme),
        Commands::Quiz { answers } => commands::quiz(tracker, answers.as_deref()),
    }
}
