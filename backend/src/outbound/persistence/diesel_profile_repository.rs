//! PostgreSQL-backed `ProfileRepository` implementation using Diesel ORM.
//!
//! A thin adapter: it checks out a pooled connection, runs a single-row
//! insert or primary-key lookup, and translates rows and errors into domain
//! types. No business logic lives here and no retries are attempted; retry
//! policy belongs to callers.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ProfilePersistenceError, ProfileRepository};
use crate::domain::{NewUserProfile, UserProfile};

use super::models::{NewProfileRow, ProfileRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `ProfileRepository` port.
#[derive(Clone)]
pub struct DieselProfileRepository {
    pool: DbPool,
}

impl DieselProfileRepository {
    /// Create a new repository with the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain persistence errors.
fn map_pool_error(error: PoolError) -> ProfilePersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ProfilePersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to domain persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> ProfilePersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ProfilePersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => ProfilePersistenceError::query("database error"),
        DieselError::QueryBuilderError(_) => ProfilePersistenceError::query("database query error"),
        _ => ProfilePersistenceError::query("database error"),
    }
}

#[async_trait]
impl ProfileRepository for DieselProfileRepository {
    async fn insert(
        &self,
        profile: &NewUserProfile,
    ) -> Result<UserProfile, ProfilePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ProfileRow = diesel::insert_into(users::table)
            .values(NewProfileRow::from(profile))
            .returning(ProfileRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserProfile>, ProfilePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProfileRow> = users::table
            .find(id)
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Into::into))
    }
}
