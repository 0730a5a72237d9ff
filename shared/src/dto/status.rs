use serde::{Deserialize, Serialize};

use crate::dto::common::ErrorResponse;
use crate::error::{Result, SharedError};

/// Line state flags published by the phone process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStatus {
    #[serde(rename = "registeredWithSIP")]
    pub registered_with_sip: bool,
    #[serde(rename = "onTheHook")]
    pub on_the_hook: bool,
    #[serde(rename = "callActive")]
    pub call_active: bool,
    pub ringing: bool,
    pub busy: bool,
}

/// Body of `GET /api/status`.
///
/// The device replies 200 with `{"error": ...}` when the phone process is
/// not running, so both shapes arrive on the success path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StatusReply {
    Status(DeviceStatus),
    Error(ErrorResponse),
}

impl StatusReply {
    pub fn into_result(self) -> Result<DeviceStatus> {
        match self {
            StatusReply::Status(status) => Ok(status),
            StatusReply::Error(ErrorResponse { error }) => Err(SharedError::Device(error)),
        }
    }
}
