//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain. They exist solely to satisfy Diesel's type
//! requirements for queries and mutations, and double as the explicit
//! field-to-column mapping table for the `users` schema.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use super::schema::users;
use crate::domain::{NewUserProfile, UserProfile};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProfileRow {
    pub id: i32,
    pub name: String,
    pub birthdate: NaiveDate,
    pub gender: String,
    pub country: String,
    pub happiness_level: i32,
    #[expect(dead_code, reason = "audit column, populated by the database")]
    pub created_at: DateTime<Utc>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            birthdate: row.birthdate,
            gender: row.gender,
            country: row.country,
            happiness_level: row.happiness_level,
        }
    }
}

/// Insertable struct for creating new profile records. The database assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewProfileRow<'a> {
    pub name: &'a str,
    pub birthdate: NaiveDate,
    pub gender: &'a str,
    pub country: &'a str,
    pub happiness_level: i32,
}

impl<'a> From<&'a NewUserProfile> for NewProfileRow<'a> {
    fn from(profile: &'a NewUserProfile) -> Self {
        Self {
            name: &profile.name,
            birthdate: profile.birthdate,
            gender: &profile.gender,
            country: &profile.country,
            happiness_level: profile.happiness_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_to_domain_profile() {
        let row = ProfileRow {
            id: 7,
            name: "Grace Hopper".into(),
            birthdate: NaiveDate::from_ymd_opt(1906, 12, 9).expect("valid date"),
            gender: "female".into(),
            country: "USA".into(),
            happiness_level: 9,
            created_at: Utc::now(),
        };

        let profile = UserProfile::from(row);
        assert_eq!(profile.id, 7);
        assert_eq!(profile.name, "Grace Hopper");
        assert_eq!(profile.country, "USA");
    }
}
