use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use plexdupes::{report::render_library_list, DuplicateScanner, Result, ScanOptions};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands};
use config::AppConfig;

mod args;
mod config;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_cli(&cli)?;
    info!("Server: {}", config.server);
    let client = config.client()?;

    match cli.command {
        Commands::Duplicates(args) => {
            let scanner = DuplicateScanner::new(client, args.scan_options());
            let mut out = std::io::stdout();
            let report = scanner.run(&mut out).await?;

            info!(
                "Scanned {} libraries: {} duplicate items, {} files",
                report.libraries_scanned.len(),
                report.duplicates.len(),
                report.total_duplicate_files
            );
            for failure in &report.libraries_failed {
                warn!(
                    "Library {} ({}) was not scanned: {}",
                    failure.library.title, failure.library.key, failure.error
                );
            }
        }
        Commands::Libraries => {
            let scanner = DuplicateScanner::new(client, ScanOptions::default());
            let libraries = scanner.libraries().await?;

            let mut out = std::io::stdout().lock();
            render_library_list(&mut out, &libraries)?;
            out.flush()?;
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env_file = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Some(e) = config::env_file_problem(env_file) {
        warn!("Ignoring .env: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
