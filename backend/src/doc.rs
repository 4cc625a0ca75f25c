//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the OpenAPI specification for the REST API. The
//! generated document backs Swagger UI in debug builds and is served at
//! `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::domain::ErrorCode;
use crate::domain::profile::{NewUserProfile, UserProfile};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::health::WelcomeResponse;
use crate::inbound::http::life_expectancy::LifeExpectancyResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Life Calendar API",
        description = "Profile record storage and life-expectancy lookup."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::life_expectancy::get_life_expectancy,
        crate::inbound::http::health::welcome,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserProfile,
        NewUserProfile,
        LifeExpectancyResponse,
        WelcomeResponse,
        ApiError,
        ErrorCode,
    )),
    tags(
        (name = "users", description = "Profile record creation and lookup"),
        (name = "life-expectancy", description = "Fixed-table life-expectancy estimates"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "meta", description = "Service banner")
    )
)]
pub struct ApiDoc;
