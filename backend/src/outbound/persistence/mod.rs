//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Concrete implementation of the profile repository port backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and `bb8`
//! connection pooling.
//!
//! The adapter is deliberately thin: row structs (`models`) and the table
//! definition (`schema`) stay internal to this module, and every database
//! failure is mapped to a [`ProfilePersistenceError`] variant before it
//! leaves the adapter.
//!
//! [`ProfilePersistenceError`]: crate::domain::ports::ProfilePersistenceError

mod diesel_profile_repository;
mod models;
mod pool;
mod schema;

pub use diesel_profile_repository::DieselProfileRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying embedded migrations at startup.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Could not open the synchronous connection used by the harness.
    #[error("failed to connect for migrations: {0}")]
    Connection(#[from] diesel::ConnectionError),
    /// One or more migrations failed to apply.
    #[error("failed to run migrations: {0}")]
    Apply(String),
}

/// Apply any pending embedded migrations.
///
/// Runs once at process start, before the server binds, over a short-lived
/// synchronous connection; the async pool is created afterwards.
pub fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut conn = diesel::pg::PgConnection::establish(database_url)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply(err.to_string()))?;
    Ok(())
}
