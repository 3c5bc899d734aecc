//! Bearer token extractor.
//!
//! Only pulls the token out of the `Authorization` header. Whether the token
//! is valid is decided by whoever consumes it.

use std::fmt;
use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use keeper_core::ApiError;

use crate::error::ApiErrorResponse;

/// Raw bearer token from the `Authorization` header.
///
/// ```ignore
/// async fn protected_route(token: BearerToken) -> impl Responder {
///     verify(token.as_str())
/// }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    fn from_request_headers(req: &HttpRequest) -> Result<Self, ApiError> {
        let value = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(ApiError::missing_authorization_token)?;

        let value = value
            .to_str()
            .map_err(|_| ApiError::invalid_authorization_token())?;

        let token = value
            .split_once(' ')
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or_else(ApiError::invalid_authorization_token)?;

        Ok(Self(token.to_string()))
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

impl FromRequest for BearerToken {
    type Error = ApiErrorResponse;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_request_headers(req).map_err(ApiErrorResponse::from))
    }
}
