//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `method_store` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use method_store::initialization::init_logger_with;
use method_store::{open_repo, run_load, Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    let log_level = cli.log_level.clone();
    let log_format = cli.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = dispatch(&cli.db_path, cli.command).await {
        eprintln!("method_store error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn dispatch(db_path: &Path, command: Command) -> Result<()> {
    match command {
        Command::Load(args) => {
            let report = run_load(db_path, &args).await?;
            println!(
                "✅ Loaded {} record{} ({} stored, {} rejected, {} failed) in {:.1}s",
                report.accepted,
                if report.accepted == 1 { "" } else { "s" },
                report.stored(),
                report.rejected,
                report.failed,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.db_path.display());
            if report.failed > 0 {
                anyhow::bail!("{} records could not be stored", report.failed);
            }
        }
        Command::List {
            limit,
            offset,
            json,
        } => {
            let repo = open_repo(db_path).await?;
            for method in repo.list(limit, offset).await? {
                if json {
                    println!("{}", serde_json::to_string(&method)?);
                } else {
                    println!("{}", method);
                }
            }
        }
        Command::Describe { id } => {
            let repo = open_repo(db_path).await?;
            println!("{}", repo.describe(id).await?);
        }
        Command::Update { id, value } => {
            let repo = open_repo(db_path).await?;
            repo.update(id, &value).await?;
            println!("Updated method {}", id);
        }
        Command::Remove { id } => {
            let repo = open_repo(db_path).await?;
            repo.remove(id).await?;
            println!("Removed method {}", id);
        }
    }
    Ok(())
}
