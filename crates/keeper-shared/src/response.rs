//! Error response body.

use std::collections::BTreeMap;

use keeper_core::ApiError;
use serde::{Deserialize, Serialize};

/// JSON body sent to clients for any [`ApiError`].
///
/// Transport statuses are not part of the body; the boundary layer sets
/// them on the response itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable catalog code.
    pub code: u16,

    /// Short, non-templated summary.
    pub message: String,

    /// Template arguments. Empty when the kind takes none.
    #[serde(default)]
    pub args: BTreeMap<String, String>,
}

impl ErrorBody {
    /// Drop the template arguments, keeping code and message.
    pub fn without_args(mut self) -> Self {
        self.args.clear();
        self
    }
}

impl From<&ApiError> for ErrorBody {
    fn from(error: &ApiError) -> Self {
        Self {
            code: error.code(),
            message: error.message().to_string(),
            args: error
                .args()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }
}

impl From<ApiError> for ErrorBody {
    fn from(error: ApiError) -> Self {
        Self::from(&error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_body_shape() {
        let body = ErrorBody::from(ApiError::email_is_taken("a@b.com"));

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "code": 1403,
                "message": "Email is already taken",
                "args": { "email": "a@b.com" },
            })
        );
    }

    #[test]
    fn test_body_has_empty_args_object() {
        let body = ErrorBody::from(ApiError::missing_authorization_token());

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["code"], 1406);
        assert_eq!(value["args"], json!({}));
    }

    #[test]
    fn test_body_omits_transport_statuses() {
        let value = serde_json::to_value(ErrorBody::from(ApiError::login())).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert!(!object.contains_key("http_code"));
        assert!(!object.contains_key("grpc_code"));
    }

    #[test]
    fn test_record_id_arg_is_canonical() {
        let id = Uuid::new_v4();
        let body = ErrorBody::from(ApiError::record_not_found(id));

        assert_eq!(body.args["recordID"], id.to_string());
    }

    #[test]
    fn test_without_args() {
        let body = ErrorBody::from(ApiError::internal_server_error("db password wrong"));

        let redacted = body.without_args();

        assert_eq!(redacted.code, 1500);
        assert_eq!(redacted.message, "Internal server error");
        assert!(redacted.args.is_empty());
    }

    #[test]
    fn test_deserialize_without_args() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"code":1409,"message":"Signup failed"}"#).unwrap();

        assert_eq!(body.code, 1409);
        assert!(body.args.is_empty());
    }
}
