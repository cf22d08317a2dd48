//! Shared test helpers for storage module tests.
//!
//! This module provides an in-memory database for repository tests and a
//! scripted repository fake for flusher and saver tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::models::Method;
use crate::storage::method::MethodRepo;
use crate::storage::run_migrations;

/// Creates a test database pool with migrations applied.
/// Uses an in-memory database for fast test execution.
///
/// Limited to one connection: every connection to `sqlite::memory:` opens
/// its own empty database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Counts rows in the `methods` table.
pub async fn count_methods(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM methods")
        .fetch_one(pool)
        .await
        .expect("Failed to count methods")
}

/// In-memory `MethodRepo` that records every chunk and fails on demand.
#[derive(Default)]
pub struct ScriptedRepo {
    calls: Mutex<Vec<Vec<Method>>>,
    failing_calls: HashSet<usize>,
    fail_all: bool,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedRepo {
    /// A repository where every commit succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository where the given 1-based calls fail.
    pub fn failing_calls(calls: impl IntoIterator<Item = usize>) -> Self {
        ScriptedRepo {
            failing_calls: calls.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A repository where every commit fails.
    pub fn always_failing() -> Self {
        ScriptedRepo {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Makes every commit sleep for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Chunks received so far, in call order.
    pub fn calls(&self) -> Vec<Vec<Method>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Highest number of commits that were running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl MethodRepo for ScriptedRepo {
    async fn add(&self, items: &[Method]) -> Result<Vec<Method>, DatabaseError> {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(items.to_vec());
            calls.len()
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_all || self.failing_calls.contains(&call) {
            return Err(DatabaseError::SqlError(sqlx::Error::PoolTimedOut));
        }
        Ok(items.to_vec())
    }
}
