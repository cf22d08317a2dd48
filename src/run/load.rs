//! The `load` pipeline: read `user_id,value` lines and store them.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::app::{is_skippable, log_progress, parse_method_line, shutdown_gracefully};
use crate::config::{LoadArgs, LoadMode, LOGGING_INTERVAL};
use crate::error_handling::SaverError;
use crate::initialization::init_database;
use crate::models::Method;
use crate::storage::{start_saver, MethodRepo, SqliteMethodRepo};

/// Results of a `load` run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Lines that carried a record (blank and comment lines excluded)
    pub total_lines: usize,
    /// Lines that parsed into a valid record
    pub accepted: usize,
    /// Lines rejected by validation
    pub rejected: usize,
    /// Accepted records that could not be stored
    pub failed: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
    /// Path to the SQLite database the records were written to
    pub db_path: PathBuf,
}

impl LoadReport {
    /// Accepted records that reached the database.
    pub fn stored(&self) -> usize {
        self.accepted.saturating_sub(self.failed)
    }
}

/// Loads records from `args.file` (or stdin for `-`) into the database at `db_path`.
///
/// # Errors
///
/// This function will return an error if:
/// - The input file cannot be opened or read
/// - Database initialization fails
/// - The write buffer settings are invalid (buffered mode)
/// - The bulk insert fails (bulk mode)
pub async fn run_load(db_path: &Path, args: &LoadArgs) -> Result<LoadReport> {
    let start_time = Instant::now();

    let pool = init_database(db_path).await?;
    let repo = SqliteMethodRepo::new(pool.clone());

    let result = if args.file.as_os_str() == "-" {
        info!("Reading records from stdin");
        load_from_reader(repo, BufReader::new(tokio::io::stdin()), args).await
    } else {
        let file = tokio::fs::File::open(&args.file)
            .await
            .with_context(|| format!("Failed to open input file {}", args.file.display()))?;
        load_from_reader(repo, BufReader::new(file), args).await
    };
    pool.close().await;

    let mut report = result?;
    report.elapsed_seconds = start_time.elapsed().as_secs_f64();
    report.db_path = db_path.to_path_buf();

    info!(
        "Load finished: {} lines, {} accepted, {} rejected, {} failed in {:.2}s",
        report.total_lines,
        report.accepted,
        report.rejected,
        report.failed,
        report.elapsed_seconds
    );
    Ok(report)
}

/// Runs the pipeline over an already opened reader.
///
/// `elapsed_seconds` and `db_path` of the returned report are left for the caller.
pub async fn load_from_reader<R>(
    repo: SqliteMethodRepo,
    reader: R,
    args: &LoadArgs,
) -> Result<LoadReport>
where
    R: AsyncBufRead + Unpin,
{
    match args.mode {
        LoadMode::Buffered => load_buffered(repo, reader, args).await,
        LoadMode::Bulk => load_bulk(repo, reader, args).await,
    }
}

async fn load_buffered<Repo, R>(repo: Repo, reader: R, args: &LoadArgs) -> Result<LoadReport>
where
    Repo: MethodRepo + 'static,
    R: AsyncBufRead + Unpin,
{
    let start_time = Instant::now();
    let cancel = CancellationToken::new();
    let (saver, saver_task) = start_saver(repo, &args.saver_config(), cancel.clone())
        .context("Failed to start write buffer")?;
    let interrupt = spawn_interrupt_listener(cancel.clone());

    let mut report = LoadReport::default();
    let mut lines = reader.lines();
    let read_result: Result<()> = async {
        while let Some(line) = lines.next_line().await.context("Failed to read input")? {
            if cancel.is_cancelled() {
                warn!("Interrupted, remaining input is not read");
                break;
            }
            let Some(method) = accept_line(&line, &mut report) else {
                continue;
            };
            match saver.save(method).await {
                Ok(()) => {}
                Err(SaverError::FlushFailed { remaining }) => {
                    warn!(
                        "Record dropped, buffer could not be flushed ({} records still buffered)",
                        remaining
                    );
                    report.failed += 1;
                }
                Err(e) => return Err(e.into()),
            }
            if report.accepted % LOGGING_INTERVAL == 0 {
                log_progress(start_time, report.accepted);
            }
        }
        Ok(())
    }
    .await;

    // Whatever happened while reading, buffered records still get a final flush
    if let Err(e) = saver.close().await {
        warn!("Closing the write buffer failed, retrying on shutdown: {}", e);
    }
    shutdown_gracefully(cancel, saver_task).await;
    interrupt.abort();

    let remaining = saver.buffered().await;
    if remaining > 0 {
        warn!("{} buffered records could not be stored", remaining);
        report.failed += remaining;
    }

    read_result?;
    Ok(report)
}

async fn load_bulk<R>(repo: SqliteMethodRepo, reader: R, args: &LoadArgs) -> Result<LoadReport>
where
    R: AsyncBufRead + Unpin,
{
    let mut report = LoadReport::default();
    let mut methods = Vec::new();
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        if let Some(method) = accept_line(&line, &mut report) {
            methods.push(method);
        }
    }

    if methods.is_empty() {
        info!("No valid records to insert");
        return Ok(report);
    }

    let stored = repo
        .add_chunked(&methods, args.chunk_size)
        .await
        .with_context(|| format!("Bulk insert of {} records failed", methods.len()))?;
    info!("Inserted {} records in one transaction", stored.len());
    Ok(report)
}

/// Parses one input line and updates the line counters.
fn accept_line(line: &str, report: &mut LoadReport) -> Option<Method> {
    if is_skippable(line) {
        return None;
    }
    report.total_lines += 1;
    match parse_method_line(line) {
        Ok(method) => {
            report.accepted += 1;
            Some(method)
        }
        Err(e) => {
            warn!("Skipping line {}: {}", report.total_lines, e);
            report.rejected += 1;
            None
        }
    }
}

/// Cancels `cancel` on Ctrl-C so the saver flushes what it holds.
fn spawn_interrupt_listener(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            signal = tokio::signal::ctrl_c() => {
                match signal {
                    Ok(()) => warn!("Received Ctrl-C, flushing buffered records"),
                    Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
                }
                cancel.cancel();
            }
        }
    })
}
