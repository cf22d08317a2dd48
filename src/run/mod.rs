//! Entry points used by the CLI.
//!
//! - `run_load` reads `user_id,value` lines and stores them through the write
//!   buffer (or in one bulk transaction)
//! - `open_repo` opens the database for the management commands

mod load;

use std::path::Path;

use anyhow::Result;

use crate::initialization::init_database;
use crate::storage::SqliteMethodRepo;

pub use load::{load_from_reader, run_load, LoadReport};

/// Opens the database at `db_path`, applying migrations, and wraps it in a repository.
pub async fn open_repo(db_path: &Path) -> Result<SqliteMethodRepo> {
    let pool = init_database(db_path).await?;
    Ok(SqliteMethodRepo::new(pool))
}
