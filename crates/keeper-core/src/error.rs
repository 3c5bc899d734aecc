//! API error catalog.
//!
//! Every failure the service reports to a client is one of the kinds below.
//! Each kind owns a stable numeric code (14xx for client errors, 15xx for
//! server errors), an HTTP status, a short message and a message template
//! whose placeholders are filled from the kind's own fields.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::UserRef;
use crate::status::{self, GrpcCode};

/// Stable error codes. Never reassign one of these to a different kind.
pub mod codes {
    pub const PARSING_BODY: u16 = 1401;
    pub const PARSING_URI: u16 = 1402;
    pub const EMAIL_IS_TAKEN: u16 = 1403;
    pub const USER_NOT_FOUND: u16 = 1404;
    pub const RECORD_NOT_FOUND: u16 = 1405;
    /// Shared by the missing and invalid token kinds.
    pub const AUTHORIZATION_TOKEN: u16 = 1406;
    pub const INVALID_RECORD_TYPE: u16 = 1408;
    pub const SIGNUP: u16 = 1409;
    pub const LOGIN: u16 = 1410;

    pub const INTERNAL_SERVER_ERROR: u16 = 1500;
}

/// Placeholder names as they appear in templates and in the `args` map.
pub mod arg {
    pub const ERROR: &str = "error";
    pub const EMAIL: &str = "email";
    pub const USER_PARAM: &str = "userParam";
    pub const RECORD_ID: &str = "recordID";
    pub const RECORD_TYPE: &str = "recordType";
}

/// A client-facing API error.
///
/// The `Display` impl renders the kind's template with its arguments
/// substituted. Rendering never fails; empty context values render as
/// empty text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Internal server error: {error}")]
    InternalServerError { error: String },

    #[error("Failed to parse body: {error}")]
    ParsingBody { error: String },

    #[error("Failed to parse URI: {error}")]
    ParsingUri { error: String },

    #[error("Email {email} is already taken")]
    EmailIsTaken { email: String },

    #[error("User {user} not found")]
    UserNotFound { user: UserRef },

    #[error("Record {record_id} not found")]
    RecordNotFound { record_id: Uuid },

    #[error("Missing authorization token")]
    MissingAuthorizationToken,

    #[error("Invalid authorization token")]
    InvalidAuthorizationToken,

    #[error("Invalid record type {record_type}")]
    InvalidRecordType { record_type: String },

    #[error("Signup failed")]
    Signup,

    #[error("Login failed")]
    Login,
}

impl ApiError {
    pub fn internal_server_error(error: impl fmt::Display) -> Self {
        Self::InternalServerError {
            error: error.to_string(),
        }
    }

    pub fn parsing_body(error: impl fmt::Display) -> Self {
        Self::ParsingBody {
            error: error.to_string(),
        }
    }

    pub fn parsing_uri(error: impl fmt::Display) -> Self {
        Self::ParsingUri {
            error: error.to_string(),
        }
    }

    pub fn email_is_taken(email: impl Into<String>) -> Self {
        Self::EmailIsTaken {
            email: email.into(),
        }
    }

    /// Accepts either a free-form user parameter or a user id.
    pub fn user_not_found(user: impl Into<UserRef>) -> Self {
        Self::UserNotFound { user: user.into() }
    }

    pub fn record_not_found(record_id: Uuid) -> Self {
        Self::RecordNotFound { record_id }
    }

    pub fn missing_authorization_token() -> Self {
        Self::MissingAuthorizationToken
    }

    pub fn invalid_authorization_token() -> Self {
        Self::InvalidAuthorizationToken
    }

    pub fn invalid_record_type(record_type: impl Into<String>) -> Self {
        Self::InvalidRecordType {
            record_type: record_type.into(),
        }
    }

    pub fn signup() -> Self {
        Self::Signup
    }

    pub fn login() -> Self {
        Self::Login
    }

    /// Stable numeric code for machine-readable client handling.
    pub fn code(&self) -> u16 {
        match self {
            Self::InternalServerError { .. } => codes::INTERNAL_SERVER_ERROR,
            Self::ParsingBody { .. } => codes::PARSING_BODY,
            Self::ParsingUri { .. } => codes::PARSING_URI,
            Self::EmailIsTaken { .. } => codes::EMAIL_IS_TAKEN,
            Self::UserNotFound { .. } => codes::USER_NOT_FOUND,
            Self::RecordNotFound { .. } => codes::RECORD_NOT_FOUND,
            Self::MissingAuthorizationToken | Self::InvalidAuthorizationToken => {
                codes::AUTHORIZATION_TOKEN
            }
            Self::InvalidRecordType { .. } => codes::INVALID_RECORD_TYPE,
            Self::Signup => codes::SIGNUP,
            Self::Login => codes::LOGIN,
        }
    }

    /// HTTP status the boundary layer should respond with.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InternalServerError { .. } => 500,
            Self::UserNotFound { .. } | Self::RecordNotFound { .. } => 404,
            Self::MissingAuthorizationToken | Self::InvalidAuthorizationToken => 401,
            Self::ParsingBody { .. }
            | Self::ParsingUri { .. }
            | Self::EmailIsTaken { .. }
            | Self::InvalidRecordType { .. }
            | Self::Signup
            | Self::Login => 400,
        }
    }

    /// gRPC status for gRPC transports.
    ///
    /// Returns `None` when the crate is built without the `grpc` feature.
    pub fn grpc_code(&self) -> Option<GrpcCode> {
        status::grpc_code_for(self)
    }

    /// Short summary without any substituted context.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InternalServerError { .. } => "Internal server error",
            Self::ParsingBody { .. } => "Failed to parse body",
            Self::ParsingUri { .. } => "Failed to parse URI",
            Self::EmailIsTaken { .. } => "Email is already taken",
            Self::UserNotFound { .. } => "User not found",
            Self::RecordNotFound { .. } => "Record not found",
            Self::MissingAuthorizationToken => "Missing authorization token",
            Self::InvalidAuthorizationToken => "Invalid authorization token",
            Self::InvalidRecordType { .. } => "Invalid record type",
            Self::Signup => "Signup failed",
            Self::Login => "Login failed",
        }
    }

    /// Message template with `{name}` placeholders for each key in [`ApiError::args`].
    pub fn template(&self) -> &'static str {
        match self {
            Self::InternalServerError { .. } => "Internal server error: {error}",
            Self::ParsingBody { .. } => "Failed to parse body: {error}",
            Self::ParsingUri { .. } => "Failed to parse URI: {error}",
            Self::EmailIsTaken { .. } => "Email {email} is already taken",
            Self::UserNotFound { .. } => "User {userParam} not found",
            Self::RecordNotFound { .. } => "Record {recordID} not found",
            Self::InvalidRecordType { .. } => "Invalid record type {recordType}",
            Self::MissingAuthorizationToken
            | Self::InvalidAuthorizationToken
            | Self::Signup
            | Self::Login => self.message(),
        }
    }

    /// Placeholder values, keyed by placeholder name.
    pub fn args(&self) -> BTreeMap<&'static str, String> {
        let mut args = BTreeMap::new();
        match self {
            Self::InternalServerError { error }
            | Self::ParsingBody { error }
            | Self::ParsingUri { error } => {
                args.insert(arg::ERROR, error.clone());
            }
            Self::EmailIsTaken { email } => {
                args.insert(arg::EMAIL, email.clone());
            }
            Self::UserNotFound { user } => {
                args.insert(arg::USER_PARAM, user.to_string());
            }
            Self::RecordNotFound { record_id } => {
                args.insert(arg::RECORD_ID, record_id.to_string());
            }
            Self::InvalidRecordType { record_type } => {
                args.insert(arg::RECORD_TYPE, record_type.clone());
            }
            Self::MissingAuthorizationToken
            | Self::InvalidAuthorizationToken
            | Self::Signup
            | Self::Login => {}
        }
        args
    }

    /// Snake-case kind identifier for structured logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::InternalServerError { .. } => "internal_server_error",
            Self::ParsingBody { .. } => "parsing_body",
            Self::ParsingUri { .. } => "parsing_uri",
            Self::EmailIsTaken { .. } => "email_is_taken",
            Self::UserNotFound { .. } => "user_not_found",
            Self::RecordNotFound { .. } => "record_not_found",
            Self::MissingAuthorizationToken => "missing_authorization_token",
            Self::InvalidAuthorizationToken => "invalid_authorization_token",
            Self::InvalidRecordType { .. } => "invalid_record_type",
            Self::Signup => "signup",
            Self::Login => "login",
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.http_status() >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn every_kind() -> Vec<ApiError> {
        vec![
            ApiError::internal_server_error("boom"),
            ApiError::parsing_body("expected value at line 1"),
            ApiError::parsing_uri("invalid digit"),
            ApiError::email_is_taken("a@b.com"),
            ApiError::user_not_found("alice"),
            ApiError::user_not_found(Uuid::new_v4()),
            ApiError::record_not_found(Uuid::new_v4()),
            ApiError::missing_authorization_token(),
            ApiError::invalid_authorization_token(),
            ApiError::invalid_record_type("note"),
            ApiError::signup(),
            ApiError::login(),
        ]
    }

    fn substitute(template: &str, args: &BTreeMap<&'static str, String>) -> String {
        args.iter().fold(template.to_string(), |rendered, (key, value)| {
            rendered.replace(&format!("{{{key}}}"), value)
        })
    }

    #[rstest]
    #[case(ApiError::internal_server_error("x"), 1500, 500)]
    #[case(ApiError::parsing_body("x"), 1401, 400)]
    #[case(ApiError::parsing_uri("x"), 1402, 400)]
    #[case(ApiError::email_is_taken("x@y.z"), 1403, 400)]
    #[case(ApiError::user_not_found("x"), 1404, 404)]
    #[case(ApiError::record_not_found(Uuid::nil()), 1405, 404)]
    #[case(ApiError::missing_authorization_token(), 1406, 401)]
    #[case(ApiError::invalid_authorization_token(), 1406, 401)]
    #[case(ApiError::invalid_record_type("x"), 1408, 400)]
    #[case(ApiError::signup(), 1409, 400)]
    #[case(ApiError::login(), 1410, 400)]
    fn test_code_and_http_status(#[case] error: ApiError, #[case] code: u16, #[case] http: u16) {
        assert_eq!(error.code(), code);
        assert_eq!(error.http_status(), http);
    }

    #[test]
    fn test_internal_server_error_renders_cause() {
        let error = ApiError::internal_server_error("disk full");

        assert_eq!(error.code(), 1500);
        assert_eq!(error.http_status(), 500);
        assert_eq!(error.to_string(), "Internal server error: disk full");
        assert!(error.is_server_error());
    }

    #[test]
    fn test_internal_server_error_from_std_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let error = ApiError::internal_server_error(&io);

        assert_eq!(error.to_string(), "Internal server error: connection reset");
    }

    #[test]
    fn test_email_is_taken_contains_email() {
        let error = ApiError::email_is_taken("a@b.com");

        assert_eq!(error.code(), 1403);
        assert_eq!(error.http_status(), 400);
        assert!(error.to_string().contains("a@b.com"));
        assert_eq!(error.args().get("email").map(String::as_str), Some("a@b.com"));
    }

    #[test]
    fn test_record_not_found_contains_canonical_uuid() {
        let id = Uuid::new_v4();
        let error = ApiError::record_not_found(id);
        let canonical = id.hyphenated().to_string();

        assert_eq!(canonical.len(), 36);
        assert!(error.to_string().contains(&canonical));
        assert_eq!(error.args().get("recordID"), Some(&canonical));
    }

    #[test]
    fn test_user_not_found_accepts_param_and_id() {
        let by_param = ApiError::user_not_found("alice@example.com");
        assert_eq!(by_param.to_string(), "User alice@example.com not found");

        let id = Uuid::new_v4();
        let by_id = ApiError::user_not_found(id);
        assert_eq!(by_id.to_string(), format!("User {id} not found"));
        assert_eq!(by_param.code(), by_id.code());
    }

    #[test]
    fn test_token_errors_share_code_but_not_message() {
        let missing = ApiError::missing_authorization_token();
        let invalid = ApiError::invalid_authorization_token();

        assert_eq!(missing.code(), invalid.code());
        assert_eq!(missing.http_status(), 401);
        assert_eq!(invalid.http_status(), 401);
        assert_ne!(missing.message(), invalid.message());
        assert_ne!(missing.to_string(), invalid.to_string());
    }

    #[test]
    fn test_rendering_is_deterministic() {
        for error in every_kind() {
            assert_eq!(error.to_string(), error.to_string());
        }
    }

    #[test]
    fn test_rendered_text_matches_template_with_args() {
        for error in every_kind() {
            let rendered = substitute(error.template(), &error.args());
            assert_eq!(rendered, error.to_string(), "kind {}", error.kind_name());
            assert!(!rendered.contains('{'), "unfilled placeholder in {rendered}");
        }
    }

    #[test]
    fn test_empty_context_renders_as_empty() {
        assert_eq!(
            ApiError::internal_server_error("").to_string(),
            "Internal server error: "
        );
        assert_eq!(ApiError::email_is_taken("").to_string(), "Email  is already taken");
        assert_eq!(ApiError::user_not_found("").to_string(), "User  not found");
        assert_eq!(
            ApiError::invalid_record_type("").to_string(),
            "Invalid record type "
        );
    }

    #[test]
    fn test_arg_less_kinds_have_no_args() {
        assert!(ApiError::missing_authorization_token().args().is_empty());
        assert!(ApiError::signup().args().is_empty());
        assert!(ApiError::login().args().is_empty());
    }

    #[test]
    fn test_only_internal_is_server_error() {
        for error in every_kind() {
            let expected = matches!(error, ApiError::InternalServerError { .. });
            assert_eq!(error.is_server_error(), expected);
            assert_eq!(error.code() >= 1500, expected);
        }
    }
}
