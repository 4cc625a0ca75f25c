//! Life calendar backend.
//!
//! Stores user profile records and exposes a fixed-table life-expectancy
//! lookup over a small REST API. Organised hexagonally: the domain core is
//! transport-agnostic, `inbound::http` adapts it to actix-web, and
//! `outbound::persistence` adapts the repository port to PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::RequestTrace;
