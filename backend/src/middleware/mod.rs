//! Actix middleware for the HTTP adapter.

pub mod request_id;

pub use request_id::RequestTrace;
