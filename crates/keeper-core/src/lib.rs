//! # Keeper Core
//!
//! The domain layer of the Keeper secrets service.
//! Holds the client-facing error catalog and the secret record payloads.
//! No transport or storage dependencies.

pub mod domain;
pub mod error;
pub mod status;

pub use error::ApiError;
pub use status::GrpcCode;
