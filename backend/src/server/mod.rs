//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::InMemoryProfileRepository;
use crate::inbound::http::error::{json_config, path_config, query_config};
use crate::inbound::http::health::{HealthState, live, ready, welcome};
use crate::inbound::http::life_expectancy::get_life_expectancy;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, get_user};
use crate::middleware::RequestTrace;
use crate::outbound::persistence::DieselProfileRepository;

/// Build handler state from configuration.
///
/// Uses the Diesel repository when a pool is configured; otherwise falls
/// back to the in-memory store so the server still comes up in development
/// and test environments without PostgreSQL.
#[must_use]
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::new(Arc::new(DieselProfileRepository::new(pool.clone()))),
        None => HttpState::new(Arc::new(InMemoryProfileRepository::default())),
    }
}

/// Assemble the actix application: routes, extractor configs, middleware,
/// and (in debug builds) Swagger UI.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .app_data(http_state)
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(create_user)
        .service(get_user)
        .service(get_life_expectancy);

    #[cfg_attr(not(debug_assertions), expect(unused_mut, reason = "mutated in debug builds only"))]
    let mut app = App::new()
        .app_data(health_state)
        .wrap(RequestTrace)
        .service(api)
        .service(welcome)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Bind the HTTP server and mark the service ready.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the bind address is unavailable.
pub fn run(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays accessible.
    let factory_health = health_state.clone();
    // Built once so every worker shares the same registry.
    #[cfg(feature = "metrics")]
    let prometheus = make_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(http_state.clone(), factory_health.clone());
        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());
        app
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(feature = "metrics")]
fn make_metrics() -> std::io::Result<actix_web_prom::PrometheusMetrics> {
    PrometheusMetricsBuilder::new("life_calendar")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("prometheus metrics setup failed: {e}")))
}
