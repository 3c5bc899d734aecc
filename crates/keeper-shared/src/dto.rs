//! Data Transfer Objects - request types for the records API.

use keeper_core::ApiError;
use keeper_core::domain::RecordPayload;
use serde::{Deserialize, Serialize};

/// Request to store a record of a given type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    #[serde(rename = "type")]
    pub record_type: String,
    pub payload: serde_json::Value,
}

impl RecordRequest {
    /// Decode the payload according to the requested record type.
    pub fn into_payload(self) -> Result<RecordPayload, ApiError> {
        RecordPayload::from_json(&self.record_type, self.payload)
    }
}
