//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning opaque strings.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error as ThisError;

use super::{NewUserProfile, UserProfile};

/// Errors surfaced by the persistence adapter when handling profiles.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ProfilePersistenceError {
    /// Database connectivity or pool checkout failures.
    #[error("profile persistence connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Any other failure executing a query.
    #[error("profile persistence query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl ProfilePersistenceError {
    /// Helper for connection-level adapter failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Durable storage for profile records.
///
/// Implementations must assign each inserted record a fresh unique id and
/// must never mutate or remove existing records; the domain offers no update
/// or delete operation.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a new record and return the stored shape with its assigned id.
    ///
    /// The insert is atomic: either the whole record becomes visible or none
    /// of it does. Identical field values across calls are permitted and
    /// produce distinct records.
    async fn insert(&self, profile: &NewUserProfile)
    -> Result<UserProfile, ProfilePersistenceError>;

    /// Fetch a record by identifier, `None` when no record matches.
    async fn find_by_id(&self, id: i32) -> Result<Option<UserProfile>, ProfilePersistenceError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    next_id: i32,
    rows: HashMap<i32, UserProfile>,
}

/// In-memory [`ProfileRepository`] used when no database is configured and
/// as the double in HTTP tests.
///
/// Ids are assigned from a monotonic counter starting at 1, mirroring a
/// PostgreSQL `SERIAL` column.
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    state: Mutex<InMemoryState>,
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn insert(
        &self,
        profile: &NewUserProfile,
    ) -> Result<UserProfile, ProfilePersistenceError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ProfilePersistenceError::query("profile store lock poisoned"))?;
        state.next_id += 1;
        let stored = UserProfile::from_new(state.next_id, profile.clone());
        state.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserProfile>, ProfilePersistenceError> {
        let state = self
            .state
            .lock()
            .map_err(|_| ProfilePersistenceError::query("profile store lock poisoned"))?;
        Ok(state.rows.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_input(name: &str) -> NewUserProfile {
        NewUserProfile {
            name: name.into(),
            birthdate: NaiveDate::from_ymd_opt(1985, 3, 1).expect("valid date"),
            gender: "male".into(),
            country: "Canada".into(),
            happiness_level: 4,
        }
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let repo = InMemoryProfileRepository::default();
        let input = sample_input("Grace");

        let stored = repo.insert(&input).await.expect("insert succeeds");
        let found = repo
            .find_by_id(stored.id)
            .await
            .expect("lookup succeeds")
            .expect("record present");

        assert_eq!(found, UserProfile::from_new(stored.id, input));
    }

    #[tokio::test]
    async fn identical_inputs_receive_distinct_ids() {
        let repo = InMemoryProfileRepository::default();
        let input = sample_input("Grace");

        let first = repo.insert(&input).await.expect("first insert");
        let second = repo.insert(&input).await.expect("second insert");

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn find_misses_for_unknown_id() {
        let repo = InMemoryProfileRepository::default();
        let found = repo.find_by_id(99).await.expect("lookup succeeds");
        assert!(found.is_none());
    }

    #[test]
    fn persistence_error_helpers_carry_messages() {
        assert_eq!(
            ProfilePersistenceError::connection("pool exhausted"),
            ProfilePersistenceError::Connection {
                message: "pool exhausted".into()
            }
        );
        assert!(
            ProfilePersistenceError::query("syntax error")
                .to_string()
                .contains("syntax error")
        );
    }
}
