//! # Keeper Web
//!
//! Boundary adapters that turn [`keeper_core::ApiError`] values into
//! actix-web responses, plus the service's logging and configuration setup.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod telemetry;

pub use auth::BearerToken;
pub use config::WebConfig;
pub use error::{ApiErrorResponse, ApiResult};
