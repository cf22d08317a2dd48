//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON output)
//! - Database connection pool with migrations applied

mod logger;

use std::path::Path;

use anyhow::Context;
use sqlx::SqlitePool;

use crate::storage::{init_db_pool_with_path, run_migrations};

// Re-export public API
pub use logger::init_logger_with;

/// Opens the database at `db_path` and brings its schema up to date.
pub async fn init_database(db_path: &Path) -> anyhow::Result<SqlitePool> {
    let pool = init_db_pool_with_path(db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;
    run_migrations(&pool).await?;
    Ok(pool)
}
