//! Schema migrations.

use std::path::PathBuf;

use anyhow::Context;
use sqlx::SqlitePool;

/// Directory holding the `.sql` migration files, resolved at build time.
fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

/// Applies every pending migration to `pool`.
///
/// Safe to call on an already-migrated database; applied versions are skipped.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), anyhow::Error> {
    let dir = migrations_dir();
    let migrator = sqlx::migrate::Migrator::new(dir.as_path())
        .await
        .with_context(|| format!("Failed to load migrations from {}", dir.display()))?;
    migrator
        .run(pool)
        .await
        .context("Failed to apply migrations")?;
    log::debug!("Applied {} migration(s)", migrator.iter().count());
    Ok(())
}
