//! Users API handlers.
//!
//! ```text
//! POST /api/v1/users {"name":"Ada","birthdate":"1990-12-10","gender":"female","country":"USA","happiness_level":7}
//! GET /api/v1/users/{user_id}
//! ```

use actix_web::{get, post, web};
use serde_json::json;

use crate::domain::ports::ProfilePersistenceError;
use crate::domain::{Error, NewUserProfile, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

fn map_persistence_error(error: ProfilePersistenceError) -> Error {
    match error {
        ProfilePersistenceError::Connection { message } => Error::service_unavailable(message),
        ProfilePersistenceError::Query { message } => Error::internal(message),
    }
}

/// Create a profile record and return it with its assigned id.
///
/// Returns 200 with the stored record. Malformed bodies never reach this
/// handler; the JSON extractor rejects them with a 400 envelope.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = NewUserProfile,
    responses(
        (status = 200, description = "Created record including its id", body = UserProfile),
        (status = 400, description = "Malformed input", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<NewUserProfile>,
) -> ApiResult<web::Json<UserProfile>> {
    let profile = state
        .profiles
        .insert(&payload.into_inner())
        .await
        .map_err(map_persistence_error)?;
    Ok(web::Json(profile))
}

/// Fetch a profile record by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    params(
        ("user_id" = i32, Path, description = "Identifier assigned at creation")
    ),
    responses(
        (status = 200, description = "Matching record", body = UserProfile),
        (status = 400, description = "Malformed identifier", body = ApiError),
        (status = 404, description = "No record with this id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<UserProfile>> {
    let user_id = path.into_inner();
    let maybe_profile = state
        .profiles
        .find_by_id(user_id)
        .await
        .map_err(map_persistence_error)?;

    maybe_profile.map(web::Json).ok_or_else(|| {
        Error::not_found("User not found")
            .with_details(json!({ "id": user_id }))
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::ProfileRepository;
    use async_trait::async_trait;

    #[derive(Default)]
    struct FailingRepository {
        connection_failure: bool,
    }

    #[async_trait]
    impl ProfileRepository for FailingRepository {
        async fn insert(
            &self,
            _profile: &NewUserProfile,
        ) -> Result<UserProfile, ProfilePersistenceError> {
            Err(self.failure())
        }

        async fn find_by_id(
            &self,
            _id: i32,
        ) -> Result<Option<UserProfile>, ProfilePersistenceError> {
            Err(self.failure())
        }
    }

    impl FailingRepository {
        fn failure(&self) -> ProfilePersistenceError {
            if self.connection_failure {
                ProfilePersistenceError::connection("database unavailable")
            } else {
                ProfilePersistenceError::query("database query failed")
            }
        }
    }

    #[test]
    fn connection_failures_map_to_service_unavailable() {
        let mapped = map_persistence_error(ProfilePersistenceError::connection("down"));
        assert_eq!(mapped.code(), ErrorCode::ServiceUnavailable);
    }

    #[test]
    fn query_failures_map_to_internal() {
        let mapped = map_persistence_error(ProfilePersistenceError::query("bad sql"));
        assert_eq!(mapped.code(), ErrorCode::InternalError);
    }

    #[actix_web::test]
    async fn storage_faults_surface_as_server_errors() {
        use actix_web::{App, test};
        use std::sync::Arc;

        let state = HttpState::new(Arc::new(FailingRepository {
            connection_failure: true,
        }));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(get_user)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/users/1").to_request(),
        )
        .await;
        assert_eq!(res.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }
}
