//! Life-expectancy estimation.
//!
//! A fixed decision table keyed by country and gender. Matching is
//! case-sensitive and exact: `"Male"` or an empty string fall into the
//! non-male bucket for a known country, and any country other than `"USA"`
//! or `"Canada"` yields the flat default regardless of gender. This mirrors
//! the placeholder table the product currently ships; no external data
//! source backs it.

/// Fallback estimate for countries outside the table.
pub const DEFAULT_LIFE_EXPECTANCY: i32 = 75;

/// Estimate life expectancy in years for the given country and gender.
///
/// Total over all string inputs; there is no failure path.
///
/// # Examples
/// ```
/// use life_calendar_backend::domain::estimate;
///
/// assert_eq!(estimate("USA", "male"), 76);
/// assert_eq!(estimate("France", "male"), 75);
/// ```
#[must_use]
pub fn estimate(country: &str, gender: &str) -> i32 {
    match country {
        "USA" => {
            if gender == "male" {
                76
            } else {
                81
            }
        }
        "Canada" => {
            if gender == "male" {
                80
            } else {
                84
            }
        }
        _ => DEFAULT_LIFE_EXPECTANCY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("USA", "male", 76)]
    #[case("USA", "female", 81)]
    #[case("USA", "", 81)]
    #[case("Canada", "male", 80)]
    #[case("Canada", "nonbinary", 84)]
    #[case("France", "male", 75)]
    #[case("", "", 75)]
    fn table_values(#[case] country: &str, #[case] gender: &str, #[case] expected: i32) {
        assert_eq!(estimate(country, gender), expected);
    }

    // Matching is case-sensitive by contract; these pin the behaviour so a
    // well-meaning normalisation change fails loudly.
    #[rstest]
    #[case("usa", "male", 75)]
    #[case("USA", "Male", 81)]
    #[case("USA", "MALE", 81)]
    #[case("canada", "male", 75)]
    fn matching_is_case_sensitive(
        #[case] country: &str,
        #[case] gender: &str,
        #[case] expected: i32,
    ) {
        assert_eq!(estimate(country, gender), expected);
    }

    #[test]
    fn unknown_country_ignores_gender() {
        assert_eq!(estimate("Atlantis", "male"), DEFAULT_LIFE_EXPECTANCY);
        assert_eq!(estimate("Atlantis", "female"), DEFAULT_LIFE_EXPECTANCY);
    }
}
