use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const REDACTED: &str = "[REDACTED]";

/// Login/password payload stored in a record.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub login: String,
    pub password: String,
    /// Sites the credential applies to, in the user's priority order.
    pub links: Vec<String>,
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("login", &self.login)
            .field("password", &REDACTED)
            .field("links", &self.links)
            .finish()
    }
}

/// Payment card payload stored in a record.
///
/// Keys are PascalCase on the wire; snake_case keys are accepted on input.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Card {
    #[serde(alias = "cardholder_name")]
    pub cardholder_name: String,
    #[serde(alias = "number")]
    pub number: String,
    #[serde(alias = "brand")]
    pub brand: String,
    #[serde(alias = "expiration_month")]
    pub expiration_month: i32,
    #[serde(alias = "expiration_year")]
    pub expiration_year: i32,
    #[serde(alias = "security_code")]
    pub security_code: String,
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("cardholder_name", &self.cardholder_name)
            .field("number", &REDACTED)
            .field("brand", &self.brand)
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .field("security_code", &REDACTED)
            .finish()
    }
}

/// Supported record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Login,
    Card,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::Login => "login",
            RecordType::Card => "card",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(RecordType::Login),
            "card" => Ok(RecordType::Card),
            other => Err(ApiError::invalid_record_type(other)),
        }
    }
}

/// A decoded record payload of any supported kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordPayload {
    Login(Login),
    Card(Card),
}

impl RecordPayload {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordPayload::Login(_) => RecordType::Login,
            RecordPayload::Card(_) => RecordType::Card,
        }
    }

    /// Decode a JSON payload for the named record type.
    ///
    /// An unknown type name yields [`ApiError::InvalidRecordType`]; a payload
    /// that does not match the type's shape yields [`ApiError::ParsingBody`].
    pub fn from_json(record_type: &str, payload: serde_json::Value) -> Result<Self, ApiError> {
        let decoded = match record_type.parse::<RecordType>()? {
            RecordType::Login => serde_json::from_value(payload).map(RecordPayload::Login),
            RecordType::Card => serde_json::from_value(payload).map(RecordPayload::Card),
        };
        decoded.map_err(ApiError::parsing_body)
    }
}
