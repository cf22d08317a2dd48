// Shared test helpers for database setup and input files.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use method_store::{open_repo, LoadArgs, LoadMode, Method};
use tempfile::TempDir;

/// Creates a temporary directory and the path of a database file inside it.
/// The directory (and the database) is removed when the `TempDir` is dropped.
#[allow(dead_code)] // Used by other test files
pub fn temp_db() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("methods.db");
    (dir, db_path)
}

/// Writes `contents` to an input file inside `dir`.
#[allow(dead_code)]
pub fn write_input(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("input.csv");
    std::fs::write(&path, contents).expect("Failed to write input file");
    path
}

/// Load options for `file` with a timer that never fires during a test.
#[allow(dead_code)]
pub fn load_args(file: PathBuf, mode: LoadMode, capacity: usize, chunk_size: i64) -> LoadArgs {
    LoadArgs {
        file,
        mode,
        capacity,
        chunk_size,
        flush_retries: 2,
        flush_interval_secs: 3600,
    }
}

/// Every stored method, ordered by id.
#[allow(dead_code)]
pub async fn stored_methods(db_path: &Path) -> Vec<Method> {
    let repo = open_repo(db_path).await.expect("Failed to open database");
    repo.list(u32::MAX, 0).await.expect("Failed to list methods")
}
