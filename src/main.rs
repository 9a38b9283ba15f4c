use anyhow::Result;
use clap::Parser;
use sheetscrub::{config::resolve_config_path, run_from_path, CleanError, RunReport};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Clean corrupted `;`-delimited exports into a single spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "sheetscrub", version)]
struct Cli {
    /// Path to the JSON config (defaults to ./config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the run report as JSON instead of a status line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) resolve config + run ─────────────────────────────────────
    let cli = Cli::parse();
    let report = match resolve_config_path(cli.config) {
        Ok(config_path) => {
            info!(config = %config_path.display(), "startup");
            run_from_path(&config_path)
        }
        Err(err) => {
            error!("config path not resolved: {:#}", err);
            RunReport::failed(&CleanError::Io(err))
        }
    };

    // ─── 3) report ───────────────────────────────────────────────────
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
