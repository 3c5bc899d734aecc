//! gRPC status mapping.
//!
//! [`GrpcCode`] mirrors the standard gRPC status codes so the catalog does
//! not depend on a particular RPC framework. The kind to status table is
//! only compiled in with the `grpc` feature.

use crate::error::ApiError;

/// Standard gRPC status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrpcCode {
    Ok,
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl GrpcCode {
    /// Numeric value carried in the `grpc-status` trailer.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Cancelled => 1,
            Self::Unknown => 2,
            Self::InvalidArgument => 3,
            Self::DeadlineExceeded => 4,
            Self::NotFound => 5,
            Self::AlreadyExists => 6,
            Self::PermissionDenied => 7,
            Self::ResourceExhausted => 8,
            Self::FailedPrecondition => 9,
            Self::Aborted => 10,
            Self::OutOfRange => 11,
            Self::Unimplemented => 12,
            Self::Internal => 13,
            Self::Unavailable => 14,
            Self::DataLoss => 15,
            Self::Unauthenticated => 16,
        }
    }
}

#[cfg(feature = "grpc")]
pub(crate) fn grpc_code_for(error: &ApiError) -> Option<GrpcCode> {
    let code = match error {
        ApiError::InternalServerError { .. } => GrpcCode::Internal,
        ApiError::ParsingBody { .. }
        | ApiError::ParsingUri { .. }
        | ApiError::InvalidRecordType { .. }
        | ApiError::Signup
        | ApiError::Login => GrpcCode::InvalidArgument,
        ApiError::EmailIsTaken { .. } => GrpcCode::AlreadyExists,
        ApiError::UserNotFound { .. } | ApiError::RecordNotFound { .. } => GrpcCode::NotFound,
        ApiError::MissingAuthorizationToken | ApiError::InvalidAuthorizationToken => {
            GrpcCode::Unauthenticated
        }
    };
    Some(code)
}

#[cfg(not(feature = "grpc"))]
pub(crate) fn grpc_code_for(_error: &ApiError) -> Option<GrpcCode> {
    None
}
