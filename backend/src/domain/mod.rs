//! Transport-agnostic core: profile records, the life-expectancy estimator,
//! the persistence port, and the domain error type.
//!
//! Nothing in this module knows about HTTP or PostgreSQL. Inbound adapters
//! translate domain errors into protocol envelopes; outbound adapters map
//! their failures into the port error types defined in [`ports`].

pub mod error;
pub mod life_expectancy;
pub mod ports;
pub mod profile;

pub use error::{Error, ErrorCode};
pub use life_expectancy::estimate;
pub use profile::{NewUserProfile, UserProfile};
