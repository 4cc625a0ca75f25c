//! User profile record types.
//!
//! Two explicit shapes: [`NewUserProfile`] is the pre-id input accepted at
//! creation, [`UserProfile`] is the stored record with its assigned
//! identifier. The store assigns `id` exactly once; no field is ever mutated
//! afterwards and no update or delete path exists.
//!
//! Fields are intentionally loose: `gender` and `country` are free-form text
//! rather than enumerations, and `happiness_level` carries no range check.
//! Validation is type coercion only, performed at the HTTP boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input shape for creating a profile record, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewUserProfile {
    /// Person's name. Required but otherwise unconstrained.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Birth date as a calendar date.
    #[schema(value_type = String, format = Date, example = "1990-12-10")]
    pub birthdate: NaiveDate,
    /// Self-reported gender, free-form text.
    #[schema(example = "female")]
    pub gender: String,
    /// Country of residence, free-form text.
    #[schema(example = "USA")]
    pub country: String,
    /// Self-reported happiness level. Any integer is valid.
    #[schema(example = 7)]
    pub happiness_level: i32,
}

/// Stored profile record, including the store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    /// Unique identifier assigned by the store at creation.
    #[schema(example = 1)]
    pub id: i32,
    /// Person's name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Birth date as a calendar date.
    #[schema(value_type = String, format = Date, example = "1990-12-10")]
    pub birthdate: NaiveDate,
    /// Self-reported gender, free-form text.
    #[schema(example = "female")]
    pub gender: String,
    /// Country of residence, free-form text.
    #[schema(example = "USA")]
    pub country: String,
    /// Self-reported happiness level.
    #[schema(example = 7)]
    pub happiness_level: i32,
}

impl UserProfile {
    /// Assemble a stored record from an input record and its assigned id.
    pub fn from_new(id: i32, profile: NewUserProfile) -> Self {
        Self {
            id,
            name: profile.name,
            birthdate: profile.birthdate,
            gender: profile.gender,
            country: profile.country,
            happiness_level: profile.happiness_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewUserProfile {
        NewUserProfile {
            name: "Ada Lovelace".into(),
            birthdate: NaiveDate::from_ymd_opt(1990, 12, 10).expect("valid date"),
            gender: "female".into(),
            country: "USA".into(),
            happiness_level: 7,
        }
    }

    #[test]
    fn from_new_preserves_all_fields() {
        let input = sample_input();
        let stored = UserProfile::from_new(42, input.clone());
        assert_eq!(stored.id, 42);
        assert_eq!(stored.name, input.name);
        assert_eq!(stored.birthdate, input.birthdate);
        assert_eq!(stored.gender, input.gender);
        assert_eq!(stored.country, input.country);
        assert_eq!(stored.happiness_level, input.happiness_level);
    }

    #[test]
    fn wire_format_uses_original_field_names() {
        let stored = UserProfile::from_new(1, sample_input());
        let value = serde_json::to_value(&stored).expect("serialize profile");
        assert_eq!(value["id"], 1);
        assert_eq!(value["happiness_level"], 7);
        assert_eq!(value["birthdate"], "1990-12-10");
    }

    #[test]
    fn input_rejects_invalid_calendar_dates() {
        let raw = serde_json::json!({
            "name": "Ada",
            "birthdate": "1990-02-30",
            "gender": "female",
            "country": "USA",
            "happiness_level": 5,
        });
        assert!(serde_json::from_value::<NewUserProfile>(raw).is_err());
    }

    #[test]
    fn input_rejects_missing_required_fields() {
        let raw = serde_json::json!({
            "name": "Ada",
            "birthdate": "1990-12-10",
            "gender": "female",
            "country": "USA",
        });
        assert!(serde_json::from_value::<NewUserProfile>(raw).is_err());
    }

    #[test]
    fn happiness_level_accepts_any_integer() {
        let raw = serde_json::json!({
            "name": "Ada",
            "birthdate": "1990-12-10",
            "gender": "female",
            "country": "USA",
            "happiness_level": -3,
        });
        let parsed = serde_json::from_value::<NewUserProfile>(raw).expect("valid input");
        assert_eq!(parsed.happiness_level, -3);
    }
}
