//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod life_expectancy;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiResult};
