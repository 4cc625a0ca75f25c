//! Life-expectancy API handler.
//!
//! ```text
//! GET /api/v1/life-expectancy?country=USA&gender=male
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::estimate;
use crate::inbound::http::error::ApiError;

/// Query parameters for the life-expectancy lookup. Both are required;
/// empty strings are legal and fall into the estimator's default branches.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct LifeExpectancyQuery {
    /// Country name, matched case-sensitively against the table.
    pub country: String,
    /// Gender, matched case-sensitively; anything but "male" takes the
    /// non-male figure for a known country.
    pub gender: String,
}

/// Response payload; the camelCase key is part of the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifeExpectancyResponse {
    /// Estimated life expectancy in years.
    #[schema(example = 76)]
    pub life_expectancy: i32,
}

/// Look up the estimated life expectancy for a country and gender.
///
/// Total over all inputs: unknown countries yield the flat default, so the
/// only failure mode is a missing query parameter.
#[utoipa::path(
    get,
    path = "/api/v1/life-expectancy",
    params(LifeExpectancyQuery),
    responses(
        (status = 200, description = "Estimate in years", body = LifeExpectancyResponse),
        (status = 400, description = "Missing query parameter", body = ApiError)
    ),
    tags = ["life-expectancy"],
    operation_id = "getLifeExpectancy"
)]
#[get("/life-expectancy")]
pub async fn get_life_expectancy(
    query: web::Query<LifeExpectancyQuery>,
) -> web::Json<LifeExpectancyResponse> {
    web::Json(LifeExpectancyResponse {
        life_expectancy: estimate(&query.country, &query.gender),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn response_uses_camel_case_key() {
        let app = test::init_service(
            App::new().service(web::scope("/api/v1").service(get_life_expectancy)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/life-expectancy?country=USA&gender=male")
                .to_request(),
        )
        .await;
        assert!(res.status().is_success());
        let value: Value = test::read_body_json(res).await;
        assert_eq!(value.get("lifeExpectancy").and_then(Value::as_i64), Some(76));
        assert!(value.get("life_expectancy").is_none());
    }
}
