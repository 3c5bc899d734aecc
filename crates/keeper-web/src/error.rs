//! Error responses for the HTTP boundary.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use keeper_core::ApiError;
use keeper_shared::ErrorBody;
use thiserror::Error;

use crate::config::WebConfig;

/// An [`ApiError`] on its way out as an HTTP response.
///
/// Server errors are rendered without their template arguments unless
/// built with `expose_internal` set.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ApiErrorResponse {
    error: ApiError,
    expose_internal: bool,
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiErrorResponse>;

impl ApiErrorResponse {
    pub fn new(error: ApiError, expose_internal: bool) -> Self {
        Self {
            error,
            expose_internal,
        }
    }

    pub fn with_config(error: ApiError, config: &WebConfig) -> Self {
        Self::new(error, config.expose_internal_errors)
    }

    pub fn error(&self) -> &ApiError {
        &self.error
    }

    pub fn into_inner(self) -> ApiError {
        self.error
    }

    fn body(&self) -> ErrorBody {
        let body = ErrorBody::from(&self.error);
        if self.error.is_server_error() && !self.expose_internal {
            body.without_args()
        } else {
            body
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        Self::new(error, false)
    }
}

impl ResponseError for ApiErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.error.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        if self.error.is_server_error() {
            tracing::error!(
                code = self.error.code(),
                kind = self.error.kind_name(),
                "{}",
                self.error
            );
        } else {
            tracing::debug!(
                code = self.error.code(),
                kind = self.error.kind_name(),
                "{}",
                self.error
            );
        }

        HttpResponse::build(self.status_code()).json(self.body())
    }
}
