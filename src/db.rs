//! SQLite connection pool shared by every request.
//!
//! The pool is created lazily by the first caller of [`SharedPool::get`].
//! Callers racing on an uninitialized pool block on the same initialization,
//! so only one pool (and one migration run) is ever created per process.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use once_cell::sync::OnceCell;

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL;",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build a new r2d2 pool for `database_url` and bring its schema up to date.
pub fn establish_connection_pool(database_url: &str) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_timeout(Duration::from_secs(5))
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: Duration::from_secs(5),
        }))
        .build(manager)?;

    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| RepositoryError::Migration(err.to_string()))?;

    Ok(pool)
}

/// Process-wide pool handle with init-once semantics.
pub struct SharedPool {
    database_url: String,
    pool: OnceCell<DbPool>,
}

impl SharedPool {
    /// Create an uninitialized handle; no connection is opened yet.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            pool: OnceCell::new(),
        }
    }

    /// Return the pool, establishing it on first use.
    ///
    /// A failed initialization leaves the handle empty so the next caller
    /// tries again.
    pub fn get(&self) -> RepositoryResult<&DbPool> {
        self.pool.get_or_try_init(|| {
            log::info!("Establishing database pool for {}", self.database_url);
            establish_connection_pool(&self.database_url)
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.pool.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn pool_is_not_created_until_first_use() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("lazy.db");
        let shared = SharedPool::new(path.to_string_lossy().to_string());

        assert!(!shared.is_initialized());
        assert!(!path.exists());

        shared.get().expect("pool initializes");

        assert!(shared.is_initialized());
        assert!(path.exists());
    }

    #[test]
    fn concurrent_first_callers_share_one_pool() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("single_flight.db");
        let shared = Arc::new(SharedPool::new(path.to_string_lossy().to_string()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    let pool = shared.get().expect("pool initializes");
                    pool as *const DbPool as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread finished"))
            .collect();

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn failed_initialization_is_retried() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing").join("retry.db");
        let shared = SharedPool::new(path.to_string_lossy().to_string());

        assert!(shared.get().is_err());
        assert!(!shared.is_initialized());

        std::fs::create_dir_all(path.parent().expect("parent dir")).expect("create parent");

        assert!(shared.get().is_ok());
        assert!(shared.is_initialized());
    }
}
