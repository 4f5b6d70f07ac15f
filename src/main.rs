// src/main.rs

use anyhow::Result;
use clap::Parser;
use ghfd::cli::Cli;
use ghfd::config::ConfigBuilder;
use ghfd::errors::Error;
use ghfd::output::{write_plan, write_summary};
#[cfg(feature = "progress")]
use ghfd::progress::IndicatifProgress;
use ghfd::progress::ProgressReporter;
use ghfd::run;
use ghfd::signal::setup_signal_handler;
use std::io::{self, Write};
use std::sync::Arc;

fn main() -> Result<()> {
    // Logs go to stderr. Default to 'warn' in release builds if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(
            if cfg!(debug_assertions) {
                "ghfd=debug".parse()?
            } else {
                "ghfd=warn".parse()?
            },
        ))
        .init();

    log::info!("Starting ghfd v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.as_str(),
                None => "Box<Any>",
            },
        };
        eprintln!("Application Error: {}", msg);
    }));

    // --- Setup ---
    let cli = Cli::parse();

    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    // Show a spinner only if requested and stderr is a TTY.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if config.show_progress && atty::is(atty::Stream::Stderr) {
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

    let mut stdout = io::stdout().lock();
    write_plan(&mut stdout, &config)?;
    stdout.flush()?;

    // --- Execution ---
    let result = run(&config, &token, progress_reporter);

    // --- Error Handling ---
    match result {
        Ok(download) => {
            write_summary(&mut stdout, &download)?;
            stdout.flush()?;
            Ok(())
        }
        Err(Error::Interrupted) => {
            eprintln!("\nDownload interrupted by user");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
